//! URL handling for the harvester
//!
//! Category URLs are built by plain concatenation onto the configured base
//! URL, and listing pages past the first by appending the page suffix and the
//! 1-based page number.

mod category;

pub use category::{category_url, normalize_category, page_url};
