pub mod http;
pub mod traits;

pub use http::{DEFAULT_BASE_URL, HttpDocumentService};
pub use traits::DocumentService;
