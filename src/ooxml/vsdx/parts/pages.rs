/// Page listing (`pages.xml`) and page contents parts.
///
/// A page entry in the listing carries the page sheet (user rows, shape data
/// and layers); the page contents part referenced through its `Rel` holds
/// the shapes and the connects between them.
use crate::common::xml::XmlElement;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{OpcPackage, Part};
use crate::ooxml::vsdx::error::Result;
use crate::ooxml::vsdx::merge::{inherit, standalone};
use crate::ooxml::vsdx::model::{Connect, Master, Page, PropRow, Shape, UserRow};
use crate::ooxml::vsdx::options::ParseOptions;
use crate::ooxml::vsdx::parts::{
    attr_string, optional_i32, optional_u32, parse_part, rel_id, required_u32, within,
};
use crate::ooxml::vsdx::sheet::decode_section;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Masters shapes may inherit from, or `None` when inheritance is off.
type Templates<'a> = Option<&'a BTreeMap<u32, Master>>;

/// Extract every page referenced by the document part.
pub fn extract_pages(
    package: &OpcPackage,
    document_part: &Part,
    masters: &BTreeMap<u32, Master>,
    options: &ParseOptions,
) -> Result<BTreeMap<u32, Page>> {
    let mut pages = BTreeMap::new();
    let Some(listing) = package.related_part(Some(document_part), rt::PAGES)? else {
        return Ok(pages);
    };

    let templates = options.inherit_from_masters.then_some(masters);
    let root = parse_part(listing)?;
    for entry in root.children_named("Page") {
        let Some(r_id) = rel_id(entry) else {
            debug!(id = ?entry.attr("ID"), "page entry without contents, skipping");
            continue;
        };
        let mut page = within(listing, || page_entry(entry))?;
        let contents = package.part_by_rid(listing, r_id)?;
        extract_contents(&mut page, contents, templates)?;
        pages.insert(page.id, page);
    }

    debug!(count = pages.len(), part = %listing.partname(), "pages extracted");
    Ok(pages)
}

/// Identity and page sheet of a listing entry.
fn page_entry(entry: &XmlElement) -> Result<Page> {
    let mut page = Page {
        id: required_u32(entry, "Page", "ID")?,
        name: attr_string(entry, "Name"),
        name_u: attr_string(entry, "NameU"),
        ..Default::default()
    };

    if let Some(sheet) = entry.child("PageSheet") {
        page.user_rows = standalone::<UserRow>(sheet)?;
        page.prop_rows = standalone::<PropRow>(sheet)?;
        page.layers = decode_section(sheet)?;
    }

    Ok(page)
}

fn extract_contents(page: &mut Page, contents: &Part, templates: Templates<'_>) -> Result<()> {
    let root = parse_part(contents)?;
    within(contents, || {
        if let Some(shapes) = root.child("Shapes") {
            for element in shapes.children_named("Shape") {
                let shape = extract_shape(element, templates)?;
                page.shapes.insert(shape.id, shape);
            }
        }

        if let Some(connects) = root.child("Connects") {
            for element in connects.children_named("Connect") {
                page.connects.push(extract_connect(element)?);
            }
        }
        Ok(())
    })
}

/// Decode a top-level shape, merging its rows over its master's.
fn extract_shape(element: &XmlElement, templates: Templates<'_>) -> Result<Shape> {
    let id = required_u32(element, "Shape", "ID")?;
    let master_id = optional_u32(element, "Shape", "Master")?;

    let master = match (templates, master_id) {
        (Some(masters), Some(master_id)) => {
            let master = masters.get(&master_id);
            if master.is_none() {
                warn!(shape = id, master = master_id, "shape refers to an unknown master");
            }
            master
        },
        _ => None,
    };

    Ok(Shape {
        id,
        name: attr_string(element, "Name"),
        name_u: attr_string(element, "NameU"),
        name_id: attr_string(element, "NameID"),
        master: master_id,
        text: element.child("Text").map(XmlElement::text),
        user_rows: inherit(master.map(|m| &m.user_rows), element)?,
        prop_rows: inherit(master.map(|m| &m.prop_rows), element)?,
    })
}

fn extract_connect(element: &XmlElement) -> Result<Connect> {
    Ok(Connect {
        from_sheet: required_u32(element, "Connect", "FromSheet")?,
        from_cell: attr_string(element, "FromCell"),
        from_part: optional_i32(element, "Connect", "FromPart")?,
        to_sheet: required_u32(element, "Connect", "ToSheet")?,
        to_cell: attr_string(element, "ToCell"),
        to_part: optional_i32(element, "Connect", "ToPart")?,
    })
}
