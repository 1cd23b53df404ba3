/// Master inheritance for user and shape data rows.
///
/// A shape placed from a master starts with the master's rows. Rows the shape
/// declares itself then win field by field, and a row marked `Del="1"`
/// suppresses the inherited row altogether. Masters are never modified: a
/// merge copies the master map before applying the shape's rows, and a shape
/// with no rows of its own simply shares the master's map.
use crate::common::xml::XmlElement;
use crate::ooxml::vsdx::error::Result;
use crate::ooxml::vsdx::model::RowMap;
use crate::ooxml::vsdx::sheet::{self, SectionRow};
use std::sync::Arc;

/// Merge the rows `sheet` declares for `R`'s section over `template`.
pub fn merge<R>(template: &RowMap<R>, sheet: &XmlElement) -> Result<RowMap<R>>
where
    R: SectionRow<Key = String>,
{
    let mut rows = sheet::rows::<R>(sheet).peekable();
    if rows.peek().is_none() {
        return Ok(Arc::clone(template));
    }
    let merged = sheet::apply_rows((**template).clone(), rows)?;
    Ok(Arc::new(merged))
}

/// Decode `R`'s section of `sheet` on its own.
pub fn standalone<R>(sheet: &XmlElement) -> Result<RowMap<R>>
where
    R: SectionRow<Key = String>,
{
    Ok(Arc::new(sheet::decode_section::<R>(sheet)?))
}

/// Merge over `template` when there is one, decode standalone otherwise.
pub fn inherit<R>(template: Option<&RowMap<R>>, sheet: &XmlElement) -> Result<RowMap<R>>
where
    R: SectionRow<Key = String>,
{
    match template {
        Some(template) => merge(template, sheet),
        None => standalone(sheet),
    }
}
