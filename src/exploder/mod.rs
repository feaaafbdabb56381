// SPDX-License-Identifier: GPL-3.0-only
pub mod decision;
pub mod log;
pub mod naming;
pub mod service;

pub use decision::{
    ExplodeRequest, ExtractionState, explode_if_needed, extraction_state, read_version,
    unknown_version,
};
pub use log::{ExploderLog, TracingExploderLog};
pub use naming::{embedded_package_folder_name, is_embedded_package_archive};
pub use service::PackageExploder;
