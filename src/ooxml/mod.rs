//! Office Open XML (OOXML) package support.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): Low-level package handling (ZIP, parts, relationships)
//! 2. **Visio** (`vsdx`): Drawing model extraction on top of the OPC layer
pub mod opc;
pub mod vsdx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};
