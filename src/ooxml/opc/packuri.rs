/// Provides the PackURI value type used to name parts inside a package.
///
/// A PackURI is an absolute part name such as `/visio/pages/page1.xml`. It is
/// the key under which the package stores each part and the base against which
/// relative relationship targets are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    /// The full pack URI string (e.g., "/visio/document.xml")
    uri: String,
}

impl PackURI {
    /// Part names are absolute; anything not starting with `/` is rejected.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("part name must be absolute, got '{}'", uri));
        }
        Ok(Self { uri })
    }

    /// Resolve a relationship target against the base URI of its source.
    ///
    /// Relative references (`pages/page1.xml`, `../masters/master2.xml`) are
    /// joined onto `base_uri` and normalized. Targets that are already absolute
    /// (`/visio/document.xml`) ignore the base.
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self, String> {
        let joined = if relative_ref.starts_with('/') {
            relative_ref.to_string()
        } else if base_uri.ends_with('/') {
            format!("{}{}", base_uri, relative_ref)
        } else {
            format!("{}/{}", base_uri, relative_ref)
        };
        Self::new(Self::normalize_path(&joined))
    }

    /// Directory holding the part: `/visio/pages` for `/visio/pages/page1.xml`,
    /// `/` for top-level parts and the package itself.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Last segment of the name, empty for the package itself.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// Name of the zip member storing this part (no leading slash).
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Name of the `.rels` part declaring this part's relationships:
    /// `/visio/_rels/document.xml.rels` for `/visio/document.xml`, and
    /// `/_rels/.rels` for the package itself.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let dir = self.base_uri().trim_end_matches('/');
        Self::new(format!("{}/_rels/{}.rels", dir, self.filename()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Resolve "." and ".." segments; ".." never climbs above the root.
    fn normalize_path(path: &str) -> String {
        let mut segments: Vec<&str> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                _ => segments.push(segment),
            }
        }
        format!("/{}", segments.join("/"))
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";
