//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the sheet data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod sheet;

// Re-export commonly used types at the crate root
pub use cell::{CellError, CellValue};
pub use sheet::{Row, Sheet};
