/// Error types for Visio package decoding.
use crate::common::xml::XmlError;
use crate::ooxml::opc::error::OpcError;
use thiserror::Error;

/// Result type for Visio operations.
pub type Result<T> = std::result::Result<T, VsdxError>;

/// Error types for Visio operations.
#[derive(Error, Debug)]
pub enum VsdxError {
    /// The container could not be opened or navigated
    #[error("OPC error: {0}")]
    Opc(#[from] OpcError),

    /// A part is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// The package has no Visio document part
    #[error("Not a Visio drawing: {0}")]
    NotVisioDocument(String),

    /// A required attribute is absent
    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// A present numeric value failed to parse
    #[error("Invalid number '{value}' for {location}")]
    InvalidNumber { location: String, value: String },

    /// Decode failure inside a specific part
    #[error("{source} (in {part})")]
    InPart {
        part: String,
        #[source]
        source: Box<VsdxError>,
    },

    /// The model could not be written as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A stored model could not be read back
    #[error("Deserialization error: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// IO error while persisting or restoring a model
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VsdxError {
    /// Attach the name of the part being decoded.
    ///
    /// Errors that already carry a part are left untouched so the innermost
    /// part is reported.
    pub(crate) fn in_part(self, part: &str) -> Self {
        match self {
            VsdxError::InPart { .. } | VsdxError::Opc(_) => self,
            other => VsdxError::InPart {
                part: part.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Strip part context, returning the underlying decode error.
    pub fn root_cause(&self) -> &VsdxError {
        match self {
            VsdxError::InPart { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
