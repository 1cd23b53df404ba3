//! vsdx - A Rust library for decoding Microsoft Visio drawings
//!
//! This library reads Visio packages (.vsdx) and turns them into a plain,
//! serializable document model: document properties, masters, pages, layers,
//! shapes with their user-defined cells and shape data, and the connections
//! between shapes.
//!
//! # Features
//!
//! - **OPC Reader**: Navigates the package relationship graph part by part
//! - **Master inheritance**: Shapes inherit rows from their masters, with
//!   per-cell overrides and deleted rows honoured
//! - **Shared rows**: Inherited row maps are reference counted, not copied
//! - **JSON export/import**: Lossless round trip of the decoded model
//! - **Batch parsing**: Independent packages are parsed in parallel
//!
//! # Example - Reading a drawing
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = vsdx::parse("network.vsdx")?;
//!
//! for page in model.document.pages.values() {
//!     println!("Page {:?}", page.name);
//!     for shape in page.shapes.values() {
//!         println!("  {:?} {:?}", shape.name_u, shape.text);
//!         for (name, row) in shape.prop_rows.iter() {
//!             println!("    {} = {:?}", name, row.value);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Options and JSON export
//!
//! ```no_run
//! use vsdx::{ParseOptions, persist};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ParseOptions::new().with_inherit_from_masters(false);
//! let model = vsdx::parse_with_options("network.vsdx", &options)?;
//!
//! persist::export_json(&model, "network.json")?;
//! let restored = persist::import_json("network.json")?;
//! assert_eq!(restored, model);
//! # Ok(())
//! # }
//! ```

/// Utilities shared across formats
pub mod common;

/// OOXML (Office Open XML) package support
///
/// This module provides the OPC package reader and the Visio drawing decoder
/// built on top of it.
pub mod ooxml;

use std::path::Path;

// Re-export commonly used types for convenience
pub use ooxml::vsdx::{
    Connect, Document, Layer, Master, Metadata, Package, Page, ParseOptions, PropRow, Result,
    RowMap, Shape, UserRow, VisioModel, VsdxError, batch, persist,
};

/// Parse a drawing with default options.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<VisioModel> {
    parse_with_options(path, &ParseOptions::default())
}

/// Parse a drawing with the given options.
pub fn parse_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<VisioModel> {
    batch::parse_path(path, options)
}
