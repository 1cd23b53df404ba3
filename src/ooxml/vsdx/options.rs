/// Configuration options for decoding a Visio package.
///
/// # Examples
///
/// ```rust
/// use vsdx::ParseOptions;
///
/// // Create with defaults
/// let options = ParseOptions::default();
///
/// // Or customize
/// let options = ParseOptions::new()
///     .with_inherit_from_masters(false)
///     .with_name("network.vsdx");
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Whether shapes inherit user and shape data rows from their masters
    pub inherit_from_masters: bool,
    /// Name recorded as the document name, overriding the file name
    pub name: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            inherit_from_masters: true,
            name: None,
        }
    }
}

impl ParseOptions {
    /// Create a new `ParseOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether shapes inherit rows from their masters.
    ///
    /// When disabled, every shape carries only the rows it declares itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vsdx::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_inherit_from_masters(false);
    /// assert!(!options.inherit_from_masters);
    /// ```
    #[inline]
    pub fn with_inherit_from_masters(mut self, inherit: bool) -> Self {
        self.inherit_from_masters = inherit;
        self
    }

    /// Set the document name.
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
