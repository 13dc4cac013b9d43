//! Foundation primitives for the texicon crates.
//!
//! This module provides:
//! - Domain constants (escape character, data-file names, cooldown default)
//! - [`line_of_offset`] - byte offset to 0-based line conversion
//!
//! This module has NO dependencies on other texicon modules.

pub mod constants;
mod text;

pub use text::line_of_offset;
