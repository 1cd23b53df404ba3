/// Open Packaging Conventions (OPC) implementation.
///
/// This module provides the read side of the OPC specification, which defines
/// the structure and packaging format of `.vsdx` drawings. It includes:
///
/// - ZIP-based physical packaging
/// - Package and part relationships with typed, index-based lookup
/// - Relationship graph traversal from the package root
///
/// The package owns every loaded part for its whole lifetime; all navigation
/// hands out borrowed parts.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod rel;

// Re-export commonly used types
pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use rel::{RelTarget, Relationship, Relationships};
