mod core;

pub use self::core::{COMPARE_FALLBACK_MESSAGE, Orchestrator};
