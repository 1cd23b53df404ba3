/// Master listing (`masters.xml`) and master contents parts.
use crate::common::xml::XmlElement;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{OpcPackage, Part};
use crate::ooxml::vsdx::error::Result;
use crate::ooxml::vsdx::merge::standalone;
use crate::ooxml::vsdx::model::{Master, PropRow, UserRow};
use crate::ooxml::vsdx::parts::{attr_string, parse_part, rel_id, required_u32, within};
use std::collections::BTreeMap;
use tracing::debug;

/// Extract every master referenced by the document part.
///
/// A document without a master listing has no masters.
pub fn extract_masters(package: &OpcPackage, document_part: &Part) -> Result<BTreeMap<u32, Master>> {
    let mut masters = BTreeMap::new();
    let Some(listing) = package.related_part(Some(document_part), rt::MASTERS)? else {
        return Ok(masters);
    };

    let root = parse_part(listing)?;
    for entry in root.children_named("Master") {
        let Some(r_id) = rel_id(entry) else {
            debug!(id = ?entry.attr("ID"), "master entry without contents, skipping");
            continue;
        };
        let id = within(listing, || required_u32(entry, "Master", "ID"))?;
        let contents = package.part_by_rid(listing, r_id)?;
        let master = extract_master(id, entry, contents)?;
        masters.insert(id, master);
    }

    debug!(count = masters.len(), part = %listing.partname(), "masters extracted");
    Ok(masters)
}

fn extract_master(id: u32, entry: &XmlElement, contents: &Part) -> Result<Master> {
    let root = parse_part(contents)?;
    let mut master = Master {
        id,
        name: attr_string(entry, "Name"),
        name_u: attr_string(entry, "NameU"),
        text: entry.child("Text").map(XmlElement::text),
        ..Default::default()
    };

    // Rows come from the master's first top-level shape.
    if let Some(shape) = root.child("Shapes").and_then(|shapes| shapes.child("Shape")) {
        within(contents, || {
            master.user_rows = standalone::<UserRow>(shape)?;
            master.prop_rows = standalone::<PropRow>(shape)?;
            Ok(())
        })?;
    }

    Ok(master)
}
