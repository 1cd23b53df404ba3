//! Decoding many packages at once.
//!
//! Packages are independent of one another, so each one is opened and parsed
//! on its own worker; nothing is shared between parses. With the `parallel`
//! feature disabled the same API runs serially.

use crate::ooxml::vsdx::error::Result;
use crate::ooxml::vsdx::model::VisioModel;
use crate::ooxml::vsdx::options::ParseOptions;
use crate::ooxml::vsdx::package::Package;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Open and parse one package from a path.
pub fn parse_path<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<VisioModel> {
    Package::open(path)?.parse(options)
}

/// Parse every path, returning one result per path in input order.
///
/// A failing package does not affect the others.
#[cfg(feature = "parallel")]
pub fn parse_many<P>(paths: &[P], options: &ParseOptions) -> Vec<Result<VisioModel>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| parse_path(path, options))
        .collect()
}

/// Parse every path, returning one result per path in input order.
///
/// A failing package does not affect the others.
#[cfg(not(feature = "parallel"))]
pub fn parse_many<P>(paths: &[P], options: &ParseOptions) -> Vec<Result<VisioModel>>
where
    P: AsRef<Path> + Sync,
{
    paths.iter().map(|path| parse_path(path, options)).collect()
}
