//! Video catalog layer
//!
//! The controller only needs lookup-by-id and list-all over the library,
//! expressed by the [`VideoCatalog`] trait so the loader can be swapped.
//! [`InMemoryCatalog`] is the implementation used by tests and by callers
//! that have already loaded their records.

mod memory;
mod traits;

pub use memory::InMemoryCatalog;
pub use traits::VideoCatalog;
