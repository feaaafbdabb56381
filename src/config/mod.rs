// SPDX-License-Identifier: GPL-3.0-only
#[allow(clippy::module_inception)]
pub mod config;
pub mod layout;

pub use config::Config;
pub use layout::{
    DATA_FOLDER, DEFAULT_PACKAGES_FOLDER, PACKAGE_ZIP_PATTERN, PackageLayout, VERSION_FILE,
    WEB_CONTENT_FOLDER,
};
