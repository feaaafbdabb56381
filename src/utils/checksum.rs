// SPDX-License-Identifier: GPL-3.0-only
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{ExploderError, Result};

/// Calculate MD5 checksum of a file as lowercase hex
pub fn calculate_file_md5(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| ExploderError::io(path, e))?;

    let mut reader = BufReader::new(file);
    let mut hasher = md5::Context::new();
    let mut buffer = [0u8; 8192];

    loop {
        let count = reader
            .read(&mut buffer)
            .map_err(|e| ExploderError::io(path, e))?;
        if count == 0 {
            break;
        }
        hasher.consume(&buffer[..count]);
    }

    Ok(format!("{:x}", hasher.compute()))
}
