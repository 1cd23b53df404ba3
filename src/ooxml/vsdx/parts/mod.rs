//! Extractors for the individual parts of a Visio package.
//!
//! Each extractor reads one kind of part (document, master listing, page
//! listing and their targets) into the model types. Errors raised while
//! decoding a part carry that part's name.

pub mod document;
pub mod masters;
pub mod pages;
pub mod properties;

use crate::common::xml::XmlElement;
use crate::ooxml::opc::Part;
use crate::ooxml::vsdx::error::{Result, VsdxError};
use crate::ooxml::vsdx::sheet::{parse_i32, parse_u32};

/// Parse a part's XML into an element tree.
pub(crate) fn parse_part(part: &Part) -> Result<XmlElement> {
    XmlElement::parse(part.blob())
        .map_err(|e| VsdxError::from(e).in_part(part.partname().as_str()))
}

/// Run `decode` and tag any error with `part`'s name.
pub(crate) fn within<T>(part: &Part, decode: impl FnOnce() -> Result<T>) -> Result<T> {
    decode().map_err(|e| e.in_part(part.partname().as_str()))
}

/// The `r:id` of an entry's `Rel` child.
pub(crate) fn rel_id(entry: &XmlElement) -> Option<&str> {
    entry.child("Rel").and_then(|rel| rel.attr("id"))
}

pub(crate) fn required_u32(
    element: &XmlElement,
    element_name: &'static str,
    attribute: &'static str,
) -> Result<u32> {
    optional_u32(element, element_name, attribute)?.ok_or(VsdxError::MissingAttribute {
        element: element_name,
        attribute,
    })
}

pub(crate) fn optional_u32(
    element: &XmlElement,
    element_name: &'static str,
    attribute: &'static str,
) -> Result<Option<u32>> {
    element
        .attr(attribute)
        .map(|value| {
            parse_u32(value).ok_or_else(|| invalid(element_name, attribute, value))
        })
        .transpose()
}

pub(crate) fn optional_i32(
    element: &XmlElement,
    element_name: &'static str,
    attribute: &'static str,
) -> Result<Option<i32>> {
    element
        .attr(attribute)
        .map(|value| {
            parse_i32(value).ok_or_else(|| invalid(element_name, attribute, value))
        })
        .transpose()
}

fn invalid(element: &str, attribute: &str, value: &str) -> VsdxError {
    VsdxError::InvalidNumber {
        location: format!("{}@{}", element, attribute),
        value: value.to_string(),
    }
}

/// Owned copy of an optional attribute.
#[inline]
pub(crate) fn attr_string(element: &XmlElement, attribute: &str) -> Option<String> {
    element.attr(attribute).map(str::to_string)
}
