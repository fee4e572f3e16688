pub mod identity_repository;
pub mod result_repository;

pub use identity_repository::{IDENTITY_KEY, IdentityRepository};
pub use result_repository::{RESULTS_KEY, ResultRepository};
