//! Output rendering and writers.
//!
//! This module handles:
//! - CSV rows and the numbered header comment
//! - Raw text rendering of header and sample records
//! - JSON summaries
//! - Opening stdout or a file as the destination

pub mod csv;
pub mod file;
pub mod json;
pub mod text;

// Re-export main functions
pub use csv::{column_labels, render_dump, render_header, write_dump, write_header};
pub use file::{open_output, validate_path};
pub use json::write_json;
pub use text::{format_dump, format_header};
