//! Application-level helpers shared by the library entry points.

pub mod url;

pub use url::{normalize_url, NormalizedUrl};
