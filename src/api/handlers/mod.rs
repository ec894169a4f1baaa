pub mod coordinator;
pub mod dashboard;
pub mod faculty;
pub mod health;
pub mod students;
pub mod verifications;
