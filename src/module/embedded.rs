// SPDX-License-Identifier: GPL-3.0-only
use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use crate::error::{ExploderError, Result};
use crate::module::traits::PackageModule;

/// Module whose resources are compiled into the host binary, typically with
/// `include_bytes!`
///
/// ```ignore
/// let module = EmbeddedModule::new("Widgets", env!("CARGO_PKG_VERSION"))
///     .with_resource("widgets.pak-webcontent.zip", include_bytes!("../pak-webcontent.zip"));
/// ```
#[derive(Debug, Clone)]
pub struct EmbeddedModule {
    name: String,
    version: String,
    resources: BTreeMap<String, &'static [u8]>,
}

impl EmbeddedModule {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            resources: BTreeMap::new(),
        }
    }

    pub fn with_resource(mut self, name: impl Into<String>, bytes: &'static [u8]) -> Self {
        self.resources.insert(name.into(), bytes);
        self
    }
}

impl PackageModule for EmbeddedModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn resource_names(&self) -> Result<Vec<String>> {
        Ok(self.resources.keys().cloned().collect())
    }

    fn open_resource(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        let bytes = self
            .resources
            .get(name)
            .ok_or_else(|| ExploderError::ResourceNotFound {
                module: self.name.clone(),
                resource: name.to_string(),
            })?;
        Ok(Box::new(Cursor::new(*bytes)))
    }
}
