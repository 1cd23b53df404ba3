/// Section / Row / Cell decoding for Visio sheets.
///
/// Every sheet element (`DocumentSheet`, `PageSheet`, `Shape`) stores its
/// property tables the same way:
///
/// ```xml
/// <Section N="Property">
///   <Row N="Cost">
///     <Cell N="Label" V="Cost"/>
///     <Cell N="Value" V="12.5"/>
///   </Row>
/// </Section>
/// ```
///
/// The decoder is written once against the [`SectionRow`] trait and
/// specialised for user rows, shape data rows and layers.
use crate::common::xml::XmlElement;
use crate::ooxml::vsdx::error::{Result, VsdxError};
use crate::ooxml::vsdx::model::{Layer, PropRow, UserRow};
use std::collections::BTreeMap;

/// A row type stored in a named section of a sheet.
pub trait SectionRow: Clone {
    /// Value of the `N` attribute of the section holding these rows
    const SECTION: &'static str;

    /// Attribute carrying the row key
    const KEY_ATTR: &'static str;

    type Key: Ord + Clone;

    fn parse_key(row: &Row<'_>) -> Result<Self::Key>;

    /// A row with no cells set.
    fn new(key: &Self::Key) -> Self;

    /// Overwrite the fields whose cells are present in `row`.
    fn apply(&mut self, row: &Row<'_>) -> Result<()>;

    /// Decode a row on its own.
    fn decode(key: &Self::Key, row: &Row<'_>) -> Result<Self> {
        let mut decoded = Self::new(key);
        decoded.apply(row)?;
        Ok(decoded)
    }
}

/// A keyed `Row` element inside a section.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    section: &'static str,
    key: &'a str,
    element: &'a XmlElement,
}

impl<'a> Row<'a> {
    /// Raw key attribute value.
    #[inline]
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Whether the row is a tombstone for an inherited row.
    pub fn is_deleted(&self) -> bool {
        self.element.attr("Del") == Some("1")
    }

    /// Value of the named cell, `None` when the cell (or its value) is absent.
    pub fn cell(&self, name: &str) -> Option<&'a str> {
        self.element
            .children_named("Cell")
            .find(|cell| cell.attr("N") == Some(name))
            .and_then(|cell| cell.attr("V"))
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.cell(name).map(str::to_string)
    }

    /// Boolean cell: `"1"` is true, any other value is false.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.cell(name).map(|v| v == "1")
    }

    pub fn int(&self, name: &str) -> Result<Option<i32>> {
        self.cell(name)
            .map(|v| parse_i32(v).ok_or_else(|| self.invalid(name, v)))
            .transpose()
    }

    pub fn float(&self, name: &str) -> Result<Option<f64>> {
        self.cell(name)
            .map(|v| parse_f64(v).ok_or_else(|| self.invalid(name, v)))
            .transpose()
    }

    fn invalid(&self, cell: &str, value: &str) -> VsdxError {
        VsdxError::InvalidNumber {
            location: format!("{}/{}/{}", self.section, self.key, cell),
            value: value.to_string(),
        }
    }
}

/// Parse an unsigned integer attribute or cell value.
pub(crate) fn parse_u32(value: &str) -> Option<u32> {
    atoi_simd::parse::<u32, false, false>(value.trim().as_bytes()).ok()
}

pub(crate) fn parse_i32(value: &str) -> Option<i32> {
    atoi_simd::parse::<i32, false, false>(value.trim().as_bytes()).ok()
}

/// Finite floats only; JSON has no representation for `inf` or `NaN`.
pub(crate) fn parse_f64(value: &str) -> Option<f64> {
    fast_float2::parse::<f64, _>(value.trim()).ok().filter(|v| v.is_finite())
}

/// First section of `sheet` named after `R`'s section.
pub fn section<'a, R: SectionRow>(sheet: &'a XmlElement) -> Option<&'a XmlElement> {
    sheet
        .children_named("Section")
        .find(|section| section.attr("N") == Some(R::SECTION))
}

/// Keyed rows of `R`'s section in document order, tombstones included.
///
/// Rows without a key are skipped.
pub fn rows<'a, R: SectionRow>(sheet: &'a XmlElement) -> impl Iterator<Item = Row<'a>> {
    section::<R>(sheet)
        .into_iter()
        .flat_map(|section| section.children_named("Row"))
        .filter_map(|element| {
            let key = element.attr(R::KEY_ATTR).filter(|key| !key.is_empty())?;
            Some(Row {
                section: R::SECTION,
                key,
                element,
            })
        })
}

/// Decode `R`'s section of `sheet` without any template.
pub fn decode_section<R: SectionRow>(sheet: &XmlElement) -> Result<BTreeMap<R::Key, R>> {
    apply_rows(BTreeMap::new(), rows::<R>(sheet))
}

/// Apply rows on top of `base` in document order.
///
/// A tombstone removes its key, a new key is decoded on its own and an
/// existing key is overlaid with the cells the row supplies.
pub(crate) fn apply_rows<'a, R: SectionRow>(
    mut base: BTreeMap<R::Key, R>,
    rows: impl Iterator<Item = Row<'a>>,
) -> Result<BTreeMap<R::Key, R>> {
    for row in rows {
        let key = R::parse_key(&row)?;
        if row.is_deleted() {
            base.remove(&key);
            continue;
        }
        match base.get_mut(&key) {
            Some(existing) => existing.apply(&row)?,
            None => {
                let value = R::decode(&key, &row)?;
                base.insert(key, value);
            },
        }
    }
    Ok(base)
}

impl SectionRow for UserRow {
    const SECTION: &'static str = "User";
    const KEY_ATTR: &'static str = "N";
    type Key = String;

    fn parse_key(row: &Row<'_>) -> Result<String> {
        Ok(row.key().to_string())
    }

    fn new(_key: &String) -> Self {
        Self::default()
    }

    fn apply(&mut self, row: &Row<'_>) -> Result<()> {
        overlay(&mut self.value, row.string("Value"));
        overlay(&mut self.prompt, row.string("Prompt"));
        Ok(())
    }
}

impl SectionRow for PropRow {
    const SECTION: &'static str = "Property";
    const KEY_ATTR: &'static str = "N";
    type Key = String;

    fn parse_key(row: &Row<'_>) -> Result<String> {
        Ok(row.key().to_string())
    }

    fn new(_key: &String) -> Self {
        Self::default()
    }

    fn apply(&mut self, row: &Row<'_>) -> Result<()> {
        overlay(&mut self.label, row.string("Label"));
        overlay(&mut self.prompt, row.string("Prompt"));
        overlay(&mut self.prop_type, row.int("Type")?);
        overlay(&mut self.format, row.string("Format"));
        overlay(&mut self.value, row.string("Value"));
        Ok(())
    }
}

impl SectionRow for Layer {
    const SECTION: &'static str = "Layer";
    const KEY_ATTR: &'static str = "IX";
    type Key = u32;

    fn parse_key(row: &Row<'_>) -> Result<u32> {
        parse_u32(row.key()).ok_or_else(|| VsdxError::InvalidNumber {
            location: format!("{}/{}", Self::SECTION, Self::KEY_ATTR),
            value: row.key().to_string(),
        })
    }

    fn new(key: &u32) -> Self {
        Self {
            index: *key,
            ..Self::default()
        }
    }

    fn apply(&mut self, row: &Row<'_>) -> Result<()> {
        overlay(&mut self.name, row.string("Name"));
        overlay(&mut self.name_u, row.string("NameUniv"));
        self.visible = row.flag("Visible").unwrap_or(self.visible);
        self.printable = row.flag("Print").unwrap_or(self.printable);
        self.active = row.flag("Active").unwrap_or(self.active);
        self.locked = row.flag("Lock").unwrap_or(self.locked);
        self.snappable = row.flag("Snap").unwrap_or(self.snappable);
        self.glued = row.flag("Glue").unwrap_or(self.glued);
        overlay(&mut self.color, row.int("Color")?);
        overlay(&mut self.color_trans, row.float("ColorTrans")?);
        Ok(())
    }
}

#[inline]
fn overlay<T>(field: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *field = value;
    }
}
