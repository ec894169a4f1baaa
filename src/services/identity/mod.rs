pub mod provider;
pub mod supabase;

pub use provider::{Identity, IdentityProvider};
pub use supabase::SupabaseIdentityProvider;
