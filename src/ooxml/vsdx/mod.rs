//! Visio (.vsdx) drawing support.
//!
//! A drawing is decoded in one pass over the package's relationship graph:
//!
//! 1. **Document** (`parts::document`): package properties and the document sheet
//! 2. **Masters** (`parts::masters`): reusable shape templates
//! 3. **Pages** (`parts::pages`): page sheets, layers, shapes and connects
//!
//! Shapes placed from a master inherit its user and shape data rows
//! (see [`merge`]). The result is an immutable [`VisioModel`] that can be
//! exported to and imported from JSON (see [`persist`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use vsdx::ooxml::vsdx::{Package, ParseOptions};
//!
//! let model = Package::open("network.vsdx")?.parse(&ParseOptions::default())?;
//! for page in model.document.pages.values() {
//!     println!("{:?}: {} shapes", page.name, page.shapes.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod batch;
pub mod error;
pub mod merge;
pub mod model;
pub mod options;
pub mod package;
pub mod parts;
pub mod persist;
pub mod sheet;

pub use batch::{parse_many, parse_path};
pub use error::{Result, VsdxError};
pub use model::{
    Connect, Document, Layer, Master, Metadata, Page, PropRow, RowMap, Shape, UserRow, VisioModel,
};
pub use options::ParseOptions;
pub use package::Package;
