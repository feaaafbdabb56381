// SPDX-License-Identifier: GPL-3.0-only
pub mod traits;
pub mod zip;

pub use traits::ArchiveExtractor;
pub use self::zip::ZipArchiveExtractor;
