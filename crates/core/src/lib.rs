pub mod client;
pub mod error;
pub mod format;
pub mod orchestrator;
pub mod types;
pub mod validation;

pub use client::*;
pub use error::*;
pub use format::*;
pub use orchestrator::*;
pub use types::*;
pub use validation::*;
