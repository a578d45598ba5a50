//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles file operations and other external dependencies.

pub mod number_io;
pub mod text_io;

use std::fs;
use std::path::Path;

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}
