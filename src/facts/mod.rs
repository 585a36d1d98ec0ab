pub mod http;
pub mod source;
pub mod types;

pub use http::HttpFactSource;
pub use source::{FactSource, FetchError};
pub use types::Fact;
