/// Package implementation for Visio drawings.
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::vsdx::error::Result;
use crate::ooxml::vsdx::model::{Metadata, VisioModel};
use crate::ooxml::vsdx::options::ParseOptions;
use crate::ooxml::vsdx::parts::document::extract_document;
use std::io::{Read, Seek};
use std::path::Path;
use std::time::Instant;
use tracing::{Level, info, warn};

/// A Visio (.vsdx) package.
///
/// This is the main entry point for decoding Visio drawings. Opening a package
/// reads the container and its relationship graph; [`Package::parse`] then
/// extracts the document model.
///
/// # Examples
///
/// ```rust,no_run
/// use vsdx::{Package, ParseOptions};
///
/// let pkg = Package::open("network.vsdx")?;
/// let model = pkg.parse(&ParseOptions::default())?;
/// println!("{} pages", model.document.pages.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,

    /// File name when opened from a path
    file_name: Option<String>,
}

impl Package {
    /// Open a .vsdx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let opc = OpcPackage::open(path)?;
        Ok(Self {
            opc,
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
        })
    }

    /// Create a .vsdx package from a reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - A reader containing the .vsdx file data (must implement Read + Seek)
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Ok(Self {
            opc: OpcPackage::from_reader(reader)?,
            file_name: None,
        })
    }

    /// Create a .vsdx package from owned bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            opc: OpcPackage::from_bytes(data)?,
            file_name: None,
        })
    }

    /// Get the underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }

    /// File name of the package, if it was opened from a path.
    #[inline]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Decode the drawing into a [`VisioModel`].
    ///
    /// The document name is `options.name` when set, the file name otherwise.
    pub fn parse(&self, options: &ParseOptions) -> Result<VisioModel> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "vsdx.parse",
            file = ?self.file_name,
            inherit = options.inherit_from_masters
        );
        let _guard = span.enter();

        match extract_document(&self.opc, options) {
            Ok(mut document) => {
                if document.name.is_none() {
                    document.name = self.file_name.clone();
                }
                info!(
                    masters = document.masters.len(),
                    pages = document.pages.len(),
                    shapes = document.shape_count(),
                    elapsed_micros = start.elapsed().as_micros(),
                    "parse_success"
                );
                Ok(VisioModel {
                    metadata: Metadata::now(),
                    document,
                })
            },
            Err(err) => {
                warn!(
                    error = %err,
                    elapsed_micros = start.elapsed().as_micros(),
                    "parse_failure"
                );
                Err(err)
            },
        }
    }
}
