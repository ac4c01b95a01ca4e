//! Build folders.
use std::path::Path;

use log::{info, warn};

use crate::error::Error;

/// Create `path` (and its parents) if needed.
///
/// With `force`, an existing folder is emptied first.
pub fn prepare_folder(path: &Path, force: bool) -> Result<(), Error> {
    if path.exists() {
        if force {
            warn!("> Clearing {:?}", path);
            std::fs::remove_dir_all(path)?;
        } else {
            info!("> Folder {:?} already exists, files may be overwritten", path);
        }
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}
