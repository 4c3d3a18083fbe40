use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};


/// Derive macro to automatically implement the accessor traits required by `IterateAndSpike`,
/// including `CurrentVoltage`, `IsSpiking`, `LastFiringTime`, `Timestep` and `Refractoriness`,
/// the struct is expected to have the fields `current_voltage`, `is_spiking`, `last_firing_time`,
/// `dt`, `tref` and `refractory_state`, and the traits must be in scope where it is derived
#[proc_macro_derive(IterateAndSpikeBase)]
pub fn derive_iterate_and_spike_traits(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Get the name of the struct we are deriving the trait for
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Generate the implementation of the trait
    let expanded = quote! {
        impl #impl_generics CurrentVoltage for #name #ty_generics #where_clause {
            fn get_current_voltage(&self) -> f32 {
                self.current_voltage
            }
        }

        impl #impl_generics IsSpiking for #name #ty_generics #where_clause {
            fn is_spiking(&self) -> bool {
                self.is_spiking
            }
        }

        impl #impl_generics LastFiringTime for #name #ty_generics #where_clause {
            fn set_last_firing_time(&mut self, timestep: Option<usize>) {
                self.last_firing_time = timestep;
            }

            fn get_last_firing_time(&self) -> Option<usize> {
                self.last_firing_time
            }
        }

        impl #impl_generics Timestep for #name #ty_generics #where_clause {
            fn get_dt(&self) -> f32 {
                self.dt
            }

            fn set_dt(&mut self, dt: f32) {
                self.dt = dt;
            }
        }

        impl #impl_generics Refractoriness for #name #ty_generics #where_clause {
            fn get_refractory_state(&self) -> RefractoryState {
                self.refractory_state
            }

            fn get_refractory_steps(&self) -> usize {
                (self.tref / self.dt).round() as usize
            }
        }
    };

    TokenStream::from(expanded)
}
