// SPDX-License-Identifier: GPL-3.0-only
use std::io::Read;

use crate::error::Result;

/// A compiled module that carries package archives as named resources
pub trait PackageModule: Send + Sync {
    /// Short module name, used as the package directory name
    fn name(&self) -> &str;

    /// Module version written into the version marker
    fn version(&self) -> &str;

    /// Dotted names of every resource bundled with the module
    fn resource_names(&self) -> Result<Vec<String>>;

    /// Open a fresh stream over the resource called `name`
    fn open_resource(&self, name: &str) -> Result<Box<dyn Read + '_>>;
}
