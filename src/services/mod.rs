pub mod authz;
pub mod identity;
