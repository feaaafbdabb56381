// SPDX-License-Identifier: GPL-3.0-only
pub mod traits;
pub mod disk;

pub use traits::FileSystem;
pub use disk::DiskFileSystem;
