//! Utilities shared across package formats.

pub mod xml;

pub use xml::{XmlElement, XmlError};
