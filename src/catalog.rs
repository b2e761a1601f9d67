//! Fixed song catalog.
//!
//! The catalog is built once at startup and never changes afterwards; every
//! query in `crate::query` borrows it read-only.

mod model;
mod store;

pub use model::*;
pub use store::*;

#[cfg(test)]
mod tests;
