use crate::error::{Result, StemError};
use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Input path with a space-free file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanitizedInput {
    pub path: PathBuf,
    /// True when `path` is a fresh copy this run owns and must delete.
    pub copied: bool,
}

impl SanitizedInput {
    /// Deletes the sanitized copy, if one was made. The original is never touched.
    pub fn cleanup(self) -> Result<()> {
        if self.copied {
            fs::remove_file(&self.path)?;
            info!("Deleted temporary sanitized file: {}", self.path.display());
        }
        Ok(())
    }
}

/// Replaces every space in the file name of `input` with an underscore.
///
/// When the name changes, the file is copied (not renamed) to the new name in
/// the same directory, overwriting anything already there. The directory part
/// of the path is never rewritten.
pub fn sanitize_filename(input: &Path) -> Result<SanitizedInput> {
    let name = input
        .file_name()
        .ok_or_else(|| StemError::InvalidInput(input.to_path_buf()))?;

    let Some(safe_name) = replace_spaces(name) else {
        debug!("Input file name needs no sanitizing: {}", input.display());
        return Ok(SanitizedInput {
            path: input.to_path_buf(),
            copied: false,
        });
    };

    let safe_path = input.with_file_name(safe_name);
    fs::copy(input, &safe_path)?;
    info!("Sanitized input copied to: {}", safe_path.display());

    Ok(SanitizedInput {
        path: safe_path,
        copied: true,
    })
}

/// `name` with spaces turned into underscores, or `None` if it has no spaces.
#[cfg(unix)]
fn replace_spaces(name: &OsStr) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    if !bytes.contains(&b' ') {
        return None;
    }
    let safe = bytes
        .iter()
        .map(|&b| if b == b' ' { b'_' } else { b })
        .collect();
    Some(OsString::from_vec(safe))
}

#[cfg(not(unix))]
fn replace_spaces(name: &OsStr) -> Option<OsString> {
    match name.to_str() {
        Some(s) if s.contains(' ') => Some(s.replace(' ', "_").into()),
        _ => None,
    }
}
