//! JSON export and import of decoded models.
//!
//! The persisted form is plain `serde_json` output of [`VisioModel`]: field
//! names are PascalCase, absent values are `null`, and integer-keyed maps use
//! the decimal id as the object key. Floating point values are written with
//! enough precision to be read back bit for bit.

use crate::ooxml::vsdx::error::{Result, VsdxError};
use crate::ooxml::vsdx::model::VisioModel;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Serialize a model to compact JSON.
pub fn to_json(model: &VisioModel) -> Result<Vec<u8>> {
    serde_json::to_vec(model).map_err(VsdxError::Serialize)
}

/// Serialize a model to indented JSON.
pub fn to_json_pretty(model: &VisioModel) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(model).map_err(VsdxError::Serialize)
}

/// Write a model as indented JSON.
pub fn to_writer<W: Write>(writer: W, model: &VisioModel) -> Result<()> {
    serde_json::to_writer_pretty(writer, model).map_err(VsdxError::Serialize)
}

/// Rebuild a model from JSON bytes.
pub fn from_json(data: &[u8]) -> Result<VisioModel> {
    serde_json::from_slice(data).map_err(VsdxError::Deserialize)
}

/// Rebuild a model from a JSON stream.
pub fn from_reader<R: Read>(reader: R) -> Result<VisioModel> {
    serde_json::from_reader(reader).map_err(VsdxError::Deserialize)
}

/// Export a model to a JSON file, replacing any existing file.
pub fn export_json<P: AsRef<Path>>(model: &VisioModel, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer(&mut writer, model)?;
    writer.flush()?;
    debug!(path = %path.display(), "model exported");
    Ok(())
}

/// Import a model from a JSON file written by [`export_json`].
pub fn import_json<P: AsRef<Path>>(path: P) -> Result<VisioModel> {
    let file = File::open(path.as_ref())?;
    from_reader(BufReader::new(file))
}
