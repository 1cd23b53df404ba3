/// The document part (`visio/document.xml`) and everything it leads to.
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::vsdx::error::{Result, VsdxError};
use crate::ooxml::vsdx::merge::standalone;
use crate::ooxml::vsdx::model::{Document, PropRow, UserRow};
use crate::ooxml::vsdx::options::ParseOptions;
use crate::ooxml::vsdx::parts::masters::extract_masters;
use crate::ooxml::vsdx::parts::pages::extract_pages;
use crate::ooxml::vsdx::parts::properties::read_properties;
use crate::ooxml::vsdx::parts::{parse_part, within};

/// Extract the whole document: properties, document sheet, masters, pages.
///
/// Masters are extracted before pages so shapes can inherit from them.
pub fn extract_document(package: &OpcPackage, options: &ParseOptions) -> Result<Document> {
    let document_part = package.related_part(None, rt::DOCUMENT)?.ok_or_else(|| {
        VsdxError::NotVisioDocument("package has no document relationship".to_string())
    })?;

    let root = parse_part(document_part)?;
    if root.name() != "VisioDocument" {
        return Err(VsdxError::NotVisioDocument(format!(
            "unexpected root element <{}> in {}",
            root.name(),
            document_part.partname()
        )));
    }

    let mut document = Document {
        name: options.name.clone(),
        ..Default::default()
    };
    read_properties(package, &mut document)?;

    if let Some(sheet) = root.child("DocumentSheet") {
        within(document_part, || {
            document.user_rows = standalone::<UserRow>(sheet)?;
            document.prop_rows = standalone::<PropRow>(sheet)?;
            Ok(())
        })?;
    }

    document.masters = extract_masters(package, document_part)?;
    document.pages = extract_pages(package, document_part, &document.masters, options)?;

    Ok(document)
}
