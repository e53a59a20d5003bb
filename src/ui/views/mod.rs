pub mod active;
pub mod error;
pub mod finished;
pub mod loader;
pub mod start;
