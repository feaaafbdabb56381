// SPDX-License-Identifier: GPL-3.0-only
//! Discovers package archives bundled with a web application and explodes
//! them onto disk under `<app>/bin/<packages folder>/<package>/`, re-extracting
//! only when a package's version differs from the one recorded in the
//! directory's `VERSION` marker.
pub mod config;
pub mod error;
pub mod exploder;
pub mod extractor;
pub mod filesystem;
pub mod logging;
pub mod module;
pub mod package_files;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{Config, PackageLayout};
pub use error::{ExploderError, Result};
pub use exploder::{ExploderLog, PackageExploder, TracingExploderLog};
pub use extractor::{ArchiveExtractor, ZipArchiveExtractor};
pub use filesystem::{DiskFileSystem, FileSystem};
pub use module::{DirectoryModule, EmbeddedModule, PackageModule};
pub use package_files::PackageFiles;
