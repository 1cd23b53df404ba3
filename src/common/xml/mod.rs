//! XML helpers shared by the package decoders.

pub mod element;

pub use element::{XmlElement, XmlError, XmlNode};
