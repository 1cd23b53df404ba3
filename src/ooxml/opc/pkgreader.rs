//! Low-level, read-only API to a serialized Open Packaging Convention (OPC) package.
//!
//! The reader decompresses the archive once, parses the package-level
//! relationships and then walks the relationship graph, collecting every
//! internal part that is reachable from the package root together with the
//! relationships declared in its `.rels` part.

use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::{RelTarget, Relationship};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet, VecDeque};
use std::io::{Read, Seek};
use tracing::warn;

/// Relationships of one source; most parts declare only a handful.
pub type RelList = SmallVec<[Relationship; 8]>;

/// A part reached by the walk, with its content and relationships.
#[derive(Debug)]
pub struct SerializedPart {
    pub partname: PackURI,

    /// The relationship type that first led to this part
    pub reltype: String,

    pub blob: Vec<u8>,

    pub rels: RelList,
}

/// Result of walking a package: its own relationships and every reachable part.
pub struct PackageReader {
    pub pkg_rels: RelList,
    pub parts: Vec<SerializedPart>,
}

impl PackageReader {
    /// Load the package: decompress all members, then walk the graph.
    pub fn from_phys_reader<R: Read + Seek>(phys_reader: &mut PhysPkgReader<R>) -> Result<Self> {
        let mut members = phys_reader.read_all()?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let pkg_rels = Self::load_rels(&members, &package_uri)?;
        let parts = Self::walk(&mut members, &pkg_rels)?;

        Ok(Self { pkg_rels, parts })
    }

    /// Relationships declared for `source`; no `.rels` member means none.
    fn load_rels(members: &HashMap<String, Vec<u8>>, source: &PackURI) -> Result<RelList> {
        let rels_uri = source.rels_uri().map_err(OpcError::InvalidPackUri)?;
        match members.get(rels_uri.membername()) {
            Some(xml) => Self::parse_rels_xml(xml, source.base_uri()),
            None => Ok(RelList::new()),
        }
    }

    /// Parse a `.rels` part, resolving internal targets against `base_uri`.
    ///
    /// Entries lacking an Id, Type or Target are ignored, as are targets that
    /// cannot be resolved to a part name.
    fn parse_rels_xml(rels_xml: &[u8], base_uri: &str) -> Result<RelList> {
        let mut rels = RelList::new();
        let mut reader = Reader::from_reader(rels_xml);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    if let Some(rel) = Self::relationship(e, base_uri)? {
                        rels.push(rel);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OpcError::XmlError(format!("Rels parse error: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }

    fn relationship(e: &BytesStart<'_>, base_uri: &str) -> Result<Option<Relationship>> {
        let (mut r_id, mut reltype, mut target_ref) = (None, None, None);
        let mut external = false;

        for attr in e.attributes() {
            let attr = attr?;
            let value = attr.unescape_value()?;
            match attr.key.as_ref() {
                b"Id" => r_id = Some(value.into_owned()),
                b"Type" => reltype = Some(value.into_owned()),
                b"Target" => target_ref = Some(value.into_owned()),
                b"TargetMode" => external = value == target_mode::EXTERNAL,
                _ => {},
            }
        }

        let (Some(r_id), Some(reltype), Some(target_ref)) = (r_id, reltype, target_ref) else {
            return Ok(None);
        };
        match Relationship::resolve(&r_id, &reltype, &target_ref, external, base_uri) {
            Ok(rel) => Ok(Some(rel)),
            Err(e) => {
                warn!(r_id = %r_id, target = %target_ref, error = %e, "unresolvable relationship target");
                Ok(None)
            },
        }
    }

    /// Breadth-first walk over internal relationships starting at the package.
    ///
    /// Blobs are moved out of `members`, so each part is owned exactly once.
    /// Targets that are missing from the archive are skipped.
    fn walk(
        members: &mut HashMap<String, Vec<u8>>,
        pkg_rels: &[Relationship],
    ) -> Result<Vec<SerializedPart>> {
        let mut parts = Vec::with_capacity(32);
        let mut visited = HashSet::with_capacity(32);
        let mut queue: VecDeque<(PackURI, String)> = VecDeque::with_capacity(pkg_rels.len());

        Self::enqueue(pkg_rels, &mut visited, &mut queue);

        while let Some((partname, reltype)) = queue.pop_front() {
            let Some(blob) = members.remove(partname.membername()) else {
                warn!(part = %partname, reltype = %reltype, "relationship target missing from package");
                continue;
            };

            let rels = Self::load_rels(members, &partname)?;
            Self::enqueue(&rels, &mut visited, &mut queue);

            parts.push(SerializedPart {
                partname,
                reltype,
                blob,
                rels,
            });
        }

        Ok(parts)
    }

    fn enqueue(
        rels: &[Relationship],
        visited: &mut HashSet<PackURI>,
        queue: &mut VecDeque<(PackURI, String)>,
    ) {
        for rel in rels {
            if let RelTarget::Part(partname) = rel.target()
                && visited.insert(partname.clone())
            {
                queue.push_back((partname.clone(), rel.reltype().to_string()));
            }
        }
    }
}
