//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod catalog;
mod resolve;
mod scan;

pub use catalog::Catalog;
pub use resolve::Resolve;
pub use scan::Scan;
