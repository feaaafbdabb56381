// SPDX-License-Identifier: GPL-3.0-only
pub mod checksum;
pub mod path_sanitizer;

pub use checksum::calculate_file_md5;
pub use path_sanitizer::is_single_component;
