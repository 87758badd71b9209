pub mod comparison;
pub mod document;
pub mod state;

pub use comparison::*;
pub use document::*;
pub use state::*;
