// SPDX-License-Identifier: GPL-3.0-only
pub mod traits;
pub mod embedded;
pub mod directory;

pub use traits::PackageModule;
pub use embedded::EmbeddedModule;
pub use directory::{DirectoryModule, MODULE_MANIFEST, ModuleManifest};
