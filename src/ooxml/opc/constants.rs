/// Constant values related to the Open Packaging Convention as used by Visio.
///
/// This module contains the relationship type URIs that link the parts of a
/// `.vsdx` package together and the relationship target modes.

/// Relationship type URIs used in Visio packages
pub mod relationship_type {
    // Package-level descriptive metadata
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

    // Visio drawing structure
    pub const DOCUMENT: &str = "http://schemas.microsoft.com/visio/2010/relationships/document";
    pub const MASTERS: &str = "http://schemas.microsoft.com/visio/2010/relationships/masters";
    pub const MASTER: &str = "http://schemas.microsoft.com/visio/2010/relationships/master";
    pub const PAGES: &str = "http://schemas.microsoft.com/visio/2010/relationships/pages";
    pub const PAGE: &str = "http://schemas.microsoft.com/visio/2010/relationships/page";
}

/// Relationship target modes
pub mod target_mode {
    /// `TargetMode` of relationships pointing outside the package; absent
    /// means internal
    pub const EXTERNAL: &str = "External";
}
