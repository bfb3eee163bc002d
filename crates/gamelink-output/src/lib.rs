//! Writers for the cleaned per-source files and the unified dataset.
//!
//! All files are UTF-8 CSV with a header row. Missing values are written as
//! empty cells and booleans as `true`/`false`.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{ensure_parent_dir, stage_file_name, write_cleaned, write_unified};
