/// Core and extended package properties.
///
/// Core properties (`docProps/core.xml`) hold the Dublin Core metadata
/// (title, creator, timestamps, ...); extended properties (`docProps/app.xml`)
/// add application specific fields such as the company and the version of
/// the application that saved the file. Both parts are optional.
use crate::common::xml::XmlElement;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::vsdx::error::Result;
use crate::ooxml::vsdx::model::Document;
use crate::ooxml::vsdx::parts::parse_part;

/// Fill the descriptive fields of `document` from the package properties.
pub fn read_properties(package: &OpcPackage, document: &mut Document) -> Result<()> {
    if let Some(part) = package.related_part(None, rt::CORE_PROPERTIES)? {
        let root = parse_part(part)?;
        apply_core(&root, document);
    }

    if let Some(part) = package.related_part(None, rt::EXTENDED_PROPERTIES)? {
        let root = parse_part(part)?;
        apply_extended(&root, document);
    }

    Ok(())
}

fn apply_core(root: &XmlElement, document: &mut Document) {
    for element in root.children() {
        let field = match element.name() {
            "title" => &mut document.title,
            "subject" => &mut document.subject,
            "description" => &mut document.description,
            "creator" => &mut document.creator,
            "category" => &mut document.category,
            "keywords" => &mut document.keywords,
            "language" => &mut document.language,
            "created" => &mut document.time_created,
            "modified" => &mut document.time_edited,
            _ => continue,
        };
        *field = text_of(element);
    }
}

fn apply_extended(root: &XmlElement, document: &mut Document) {
    for element in root.children() {
        let field = match element.name() {
            "Manager" => &mut document.manager,
            "Company" => &mut document.company,
            "AppVersion" => &mut document.app_version,
            _ => continue,
        };
        *field = text_of(element);
    }
}

/// Element text, `None` when blank.
fn text_of(element: &XmlElement) -> Option<String> {
    let text = element.text();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
