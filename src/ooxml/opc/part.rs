/// Open Packaging Convention (OPC) objects related to package parts.
///
/// A part is one named resource inside the package together with the
/// relationships that originate from it. Parts are created once while the
/// package is loaded and are read-only afterwards.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A loaded package part.
#[derive(Debug)]
pub struct Part {
    /// Absolute part name
    partname: PackURI,

    /// Type of the relationship through which the part was first reached
    reltype: String,

    /// Decompressed part content
    blob: Vec<u8>,

    /// Relationships originating from this part
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, reltype: String, blob: Vec<u8>, rels: Relationships) -> Self {
        Self {
            partname,
            reltype,
            blob,
            rels,
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Relationship type the package walk used to discover this part.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the binary content of this part.
    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}
