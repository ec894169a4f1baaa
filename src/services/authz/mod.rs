pub mod role;

pub use role::{AllowList, Role};
