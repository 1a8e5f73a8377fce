pub mod auth_service;
pub mod clock_service;

pub use auth_service::*;
pub use clock_service::*;
