//! Typed relationships between package parts.
//!
//! A relationship is a directed edge from a source (a part or the package
//! itself) to a target. Targets are resolved once, when the `.rels` part is
//! read: internal targets become absolute part names, external targets are
//! kept verbatim and never followed.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::collections::HashMap;

/// Where a relationship points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelTarget {
    /// A part inside the package
    Part(PackURI),
    /// A resource outside the package (hyperlink, linked file, ...)
    External(String),
}

/// A single relationship declared by a source.
#[derive(Debug, Clone)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target: RelTarget,
}

impl Relationship {
    pub fn new(r_id: impl Into<String>, reltype: impl Into<String>, target: RelTarget) -> Self {
        Self {
            r_id: r_id.into(),
            reltype: reltype.into(),
            target,
        }
    }

    /// Build a relationship from the attributes of a `<Relationship>` element
    /// found in the `.rels` of a source located at `base_uri`.
    pub fn resolve(
        r_id: &str,
        reltype: &str,
        target_ref: &str,
        external: bool,
        base_uri: &str,
    ) -> Result<Self> {
        let target = if external {
            RelTarget::External(target_ref.to_string())
        } else {
            let partname =
                PackURI::from_rel_ref(base_uri, target_ref).map_err(OpcError::InvalidPackUri)?;
            RelTarget::Part(partname)
        };
        Ok(Self::new(r_id, reltype, target))
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target(&self) -> &RelTarget {
        &self.target
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        matches!(self.target, RelTarget::External(_))
    }

    /// Absolute name of the target part.
    ///
    /// External relationships have no part and yield `InvalidRelationship`.
    pub fn target_partname(&self) -> Result<&PackURI> {
        match &self.target {
            RelTarget::Part(partname) => Ok(partname),
            RelTarget::External(url) => Err(OpcError::InvalidRelationship(format!(
                "'{}' points outside the package ({})",
                self.r_id, url
            ))),
        }
    }
}

/// Relationships declared by one source.
///
/// Declaration order is kept so "the first relationship of a type" is stable,
/// and an rId index serves `r:id` references from listing parts.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
    by_rid: HashMap<String, usize>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship. A repeated rId replaces the earlier entry in place.
    pub fn push(&mut self, rel: Relationship) {
        match self.by_rid.get(rel.r_id()) {
            Some(&slot) => self.rels[slot] = rel,
            None => {
                self.by_rid.insert(rel.r_id.clone(), self.rels.len());
                self.rels.push(rel);
            },
        }
    }

    /// Look up a relationship by rId.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.by_rid.get(r_id).map(|&slot| &self.rels[slot])
    }

    /// Relationships of the given type, in declaration order.
    pub fn by_reltype<'a>(&'a self, reltype: &'a str) -> impl Iterator<Item = &'a Relationship> {
        self.rels.iter().filter(move |rel| rel.reltype == reltype)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }
}

impl FromIterator<Relationship> for Relationships {
    fn from_iter<I: IntoIterator<Item = Relationship>>(iter: I) -> Self {
        let mut rels = Self::new();
        for rel in iter {
            rels.push(rel);
        }
        rels
    }
}
