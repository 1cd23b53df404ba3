/// Objects that implement reading OPC packages.
///
/// This module provides the main OpcPackage type, which represents an Open Packaging
/// Convention package in memory. The package exclusively owns every loaded part;
/// callers navigate it through typed relationships and get borrowed parts back.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::rel::{Relationship, Relationships};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Main API class for working with OPC packages.
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts reachable from the package root, indexed by partname
    parts: HashMap<PackURI, Part>,
}

impl OpcPackage {
    /// Open an OPC package from a file.
    ///
    /// # Example
    /// ```no_run
    /// use vsdx::ooxml::opc::OpcPackage;
    ///
    /// let pkg = OpcPackage::open("drawing.vsdx")?;
    /// println!("{} parts", pkg.part_count());
    /// # Ok::<(), vsdx::ooxml::opc::OpcError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut phys_reader = PhysPkgReader::open(path)?;
        Self::from_phys_reader(&mut phys_reader)
    }

    /// Load an OPC package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut phys_reader = PhysPkgReader::new(reader)?;
        Self::from_phys_reader(&mut phys_reader)
    }

    /// Load an OPC package from owned bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }

    fn from_phys_reader<R: Read + Seek>(phys_reader: &mut PhysPkgReader<R>) -> Result<Self> {
        let pkg_reader = PackageReader::from_phys_reader(phys_reader)?;
        Ok(Self::unmarshal(pkg_reader))
    }

    /// Convert the walked parts into the in-memory graph.
    fn unmarshal(pkg_reader: PackageReader) -> Self {
        let rels = pkg_reader.pkg_rels.into_iter().collect();
        let parts = pkg_reader
            .parts
            .into_iter()
            .map(|spart| {
                let part = Part::new(
                    spart.partname.clone(),
                    spart.reltype,
                    spart.blob,
                    spart.rels.into_iter().collect(),
                );
                (spart.partname, part)
            })
            .collect();

        Self { rels, parts }
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .get(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Relationships of `source`, or the package-level ones for `None`.
    fn source_rels<'a>(&'a self, source: Option<&'a Part>) -> &'a Relationships {
        match source {
            Some(part) => part.rels(),
            None => &self.rels,
        }
    }

    fn target_part(&self, rel: &Relationship) -> Result<&Part> {
        self.get_part(rel.target_partname()?)
    }

    /// Resolve every internal relationship of `reltype` from `source` (or from
    /// the package root when `source` is `None`) to its target part.
    ///
    /// Returns an empty vector when no relationship of that type exists. A
    /// relationship whose target is absent from the package is an error.
    pub fn related_parts(&self, source: Option<&Part>, reltype: &str) -> Result<Vec<&Part>> {
        self.source_rels(source)
            .by_reltype(reltype)
            .filter(|rel| !rel.is_external())
            .map(|rel| self.target_part(rel))
            .collect()
    }

    /// Resolve the first internal relationship of `reltype`, if any.
    pub fn related_part(&self, source: Option<&Part>, reltype: &str) -> Result<Option<&Part>> {
        self.source_rels(source)
            .by_reltype(reltype)
            .find(|rel| !rel.is_external())
            .map(|rel| self.target_part(rel))
            .transpose()
    }

    /// Resolve an explicit `r:id` reference declared by `source`.
    pub fn part_by_rid(&self, source: &Part, r_id: &str) -> Result<&Part> {
        let rel = source.rels().get(r_id).ok_or_else(|| {
            OpcError::RelationshipNotFound(format!("'{}' in {}", r_id, source.partname()))
        })?;
        self.target_part(rel)
    }

    /// Get an iterator over all parts in the package.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}
