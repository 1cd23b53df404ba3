/// In-memory document model produced by the Visio decoder.
///
/// Every type here is plain data: it is built once by the extractors, never
/// mutated afterwards, and can be shared read-only across threads. The serde
/// representation uses PascalCase field names, so JSON written by older
/// exports of this model can be imported unchanged.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable, shareable map from row name to row.
///
/// Row maps of a master are handed to every shape that inherits them without
/// overrides, so they are reference counted rather than copied.
pub type RowMap<R> = Arc<BTreeMap<String, R>>;

/// Collections are written as `null` when empty by older exports.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A row of a `User` section (user-defined cell).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRow {
    pub value: Option<String>,
    pub prompt: Option<String>,
}

/// A row of a `Property` section (shape data).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropRow {
    pub label: Option<String>,
    pub prompt: Option<String>,
    /// Data type code of the property (0 = string, 1 = fixed list, 2 = number, ...)
    #[serde(rename = "Type")]
    pub prop_type: Option<i32>,
    pub format: Option<String>,
    pub value: Option<String>,
}

/// A layer declared on a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Layer {
    pub index: u32,
    pub name: Option<String>,
    pub name_u: Option<String>,
    pub visible: bool,
    #[serde(rename = "Print")]
    pub printable: bool,
    pub active: bool,
    #[serde(rename = "Lock")]
    pub locked: bool,
    #[serde(rename = "Snap")]
    pub snappable: bool,
    #[serde(rename = "Glue")]
    pub glued: bool,
    /// Color index; absent when the layer uses its shapes' own colors
    pub color: Option<i32>,
    /// Color transparency in `0.0..=1.0`
    pub color_trans: Option<f64>,
}

/// A glue link between connection points of two shapes on a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Connect {
    pub from_sheet: u32,
    pub from_cell: Option<String>,
    pub from_part: Option<i32>,
    pub to_sheet: u32,
    pub to_cell: Option<String>,
    pub to_part: Option<i32>,
}

/// A shape placed on a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shape {
    pub id: u32,
    pub name: Option<String>,
    pub name_u: Option<String>,
    #[serde(rename = "NameId")]
    pub name_id: Option<String>,
    /// ID of the master this shape is an instance of
    pub master: Option<u32>,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_rows: RowMap<UserRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prop_rows: RowMap<PropRow>,
}

/// One drawing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Page {
    pub id: u32,
    pub name: Option<String>,
    pub name_u: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_rows: RowMap<UserRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prop_rows: RowMap<PropRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layers: BTreeMap<u32, Layer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shapes: BTreeMap<u32, Shape>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub connects: Vec<Connect>,
}

impl Page {
    /// Shapes of this page that are instances of `master_id`.
    pub fn shapes_of_master(&self, master_id: u32) -> impl Iterator<Item = &Shape> {
        self.shapes
            .values()
            .filter(move |shape| shape.master == Some(master_id))
    }

    /// Connects that start or end at the given shape.
    pub fn connects_of(&self, shape_id: u32) -> impl Iterator<Item = &Connect> {
        self.connects
            .iter()
            .filter(move |c| c.from_sheet == shape_id || c.to_sheet == shape_id)
    }
}

/// A master (reusable shape template).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Master {
    pub id: u32,
    pub name: Option<String>,
    pub name_u: Option<String>,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_rows: RowMap<UserRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prop_rows: RowMap<PropRow>,
}

/// The drawing: descriptive properties, document sheet rows, masters and pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    /// File name of the parsed package
    pub name: Option<String>,
    pub title: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub creator: Option<String>,
    pub manager: Option<String>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub keywords: Option<String>,
    pub language: Option<String>,
    /// Creation timestamp as stored in the core properties (W3CDTF)
    pub time_created: Option<String>,
    /// Last modification timestamp as stored in the core properties (W3CDTF)
    pub time_edited: Option<String>,
    pub app_version: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_rows: RowMap<UserRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prop_rows: RowMap<PropRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub masters: BTreeMap<u32, Master>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: BTreeMap<u32, Page>,
}

impl Document {
    /// Find a page by its unique (universal) name.
    pub fn page_by_name_u(&self, name_u: &str) -> Option<&Page> {
        self.pages
            .values()
            .find(|page| page.name_u.as_deref() == Some(name_u))
    }

    /// Find a master by its unique (universal) name.
    pub fn master_by_name_u(&self, name_u: &str) -> Option<&Master> {
        self.masters
            .values()
            .find(|master| master.name_u.as_deref() == Some(name_u))
    }

    /// Total number of shapes over all pages.
    pub fn shape_count(&self) -> usize {
        self.pages.values().map(|page| page.shapes.len()).sum()
    }
}

/// Information about the extraction run itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metadata {
    /// When the model was extracted
    pub export_time: DateTime<Utc>,
    /// Version of the decoder that produced the model
    #[serde(rename = "VisioParserVersion")]
    pub parser_version: String,
}

impl Metadata {
    /// Metadata for an extraction happening now.
    pub fn now() -> Self {
        Self {
            export_time: Utc::now(),
            parser_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// The complete result of decoding one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisioModel {
    pub metadata: Metadata,
    pub document: Document,
}
