//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the session
//! lists and all presentation state (tabs, menus, text inputs, popups).

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
