//! Collision / idempotency guard.

use std::path::Path;

use crate::application::ApplicationError;

/// What a write to an accepted target will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteVerdict {
    Create,
    Overwrite,
}

/// Decide whether `path` may be written.
///
/// Issues exactly one existence check and no other I/O.
///
/// # Errors
/// [`ApplicationError::Collision`] when the file exists and `overwrite` is
/// false.
pub fn check_writable(
    exists: impl FnOnce(&Path) -> bool,
    path: &Path,
    overwrite: bool,
) -> Result<WriteVerdict, ApplicationError> {
    match (exists(path), overwrite) {
        (false, _) => Ok(WriteVerdict::Create),
        (true, true) => Ok(WriteVerdict::Overwrite),
        (true, false) => Err(ApplicationError::Collision {
            path: path.to_path_buf(),
        }),
    }
}
