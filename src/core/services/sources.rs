//! Source expansion - resolves a source glob into file entries

use std::fs;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::core::models::FileEntry;

/// Errors that can occur while expanding a source glob
#[derive(Debug, Error)]
pub enum SourceError {
    /// The glob pattern is invalid
    #[error("invalid source pattern `{pattern}`: {source}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Parse failure reported by the glob engine
        #[source]
        source: glob::PatternError,
    },

    /// A matched path could not be traversed
    #[error("failed to match sources: {0}")]
    Glob(#[from] glob::GlobError),

    /// A matched file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The unreadable file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The joined pattern is not valid unicode
    #[error("source pattern is not valid unicode: {}", path.display())]
    NonUnicode {
        /// The offending path
        path: PathBuf,
    },
}

/// Expand a glob, relative to `root`, into entries sorted by path
///
/// Entry paths are made relative to the pattern's base, so `css/style.scss`
/// matched by `css/*.scss` flows through the pipeline as `style.scss`.
/// Matching nothing is not an error; directories are skipped.
pub fn collect(root: &Path, pattern: &str) -> Result<Vec<FileEntry>, SourceError> {
    let joined = root.join(pattern);
    let glob_pattern = joined
        .to_str()
        .ok_or_else(|| SourceError::NonUnicode {
            path: joined.clone(),
        })?;

    let base = root.join(pattern_base(pattern));

    let paths = glob::glob(glob_pattern).map_err(|source| SourceError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut entries = Vec::new();
    for path in paths {
        let path = path?;
        if !path.is_file() {
            continue;
        }
        let contents = fs::read_to_string(&path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;
        let relative = path
            .strip_prefix(&base)
            .map_or_else(|_| path.clone(), Path::to_path_buf);
        entries.push(FileEntry::new(relative, contents));
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// The leading run of pattern components free of glob metacharacters
///
/// The final component is never part of the base, even when it carries no
/// metacharacter: the base of `css/style.scss` is `css`.
#[must_use]
pub fn pattern_base(pattern: &str) -> PathBuf {
    let components: Vec<Component<'_>> = Path::new(pattern).components().collect();

    let mut base = PathBuf::new();
    for component in &components[..components.len().saturating_sub(1)] {
        if let Component::Normal(part) = component {
            if part.to_string_lossy().contains(['*', '?', '[']) {
                break;
            }
        }
        base.push(component.as_os_str());
    }
    base
}
