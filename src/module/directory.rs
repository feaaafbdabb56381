// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{ExploderError, Result};
use crate::module::traits::PackageModule;
use crate::utils::is_single_component;

/// File describing a module directory
pub const MODULE_MANIFEST: &str = "module.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub name: String,
    pub version: String,
}

/// Module laid out on disk: a `module.toml` manifest next to resource files
/// named by their dotted resource names
#[derive(Debug, Clone)]
pub struct DirectoryModule {
    root: PathBuf,
    manifest: ModuleManifest,
}

impl DirectoryModule {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let manifest_path = root.join(MODULE_MANIFEST);

        let contents = std::fs::read_to_string(&manifest_path)
            .map_err(|e| ExploderError::io(&manifest_path, e))?;
        let manifest: ModuleManifest =
            toml::from_str(&contents).map_err(|source| ExploderError::Manifest {
                path: manifest_path.clone(),
                source,
            })?;

        Ok(Self { root, manifest })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PackageModule for DirectoryModule {
    fn name(&self) -> &str {
        &self.manifest.name
    }

    fn version(&self) -> &str {
        &self.manifest.version
    }

    fn resource_names(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| ExploderError::io(&self.root, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ExploderError::io(&self.root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| ExploderError::io(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name != MODULE_MANIFEST {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn open_resource(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        let path = self.root.join(name);
        if !is_single_component(name) || !path.is_file() {
            return Err(ExploderError::ResourceNotFound {
                module: self.manifest.name.clone(),
                resource: name.to_string(),
            });
        }

        let file = File::open(&path).map_err(|e| ExploderError::io(&path, e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
