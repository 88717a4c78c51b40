//! Writing generated samples to disk.

use std::{
    ffi::OsString,
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{info, instrument};

use crate::{error::OutputError, generator::GraphSample};

/// Extension appended to every output base name.
pub const OUTPUT_EXTENSION: &str = "txt";

/// How [`write_sample`] treats an existing file at the target path.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WritePolicy {
    /// Fail with [`OutputError::AlreadyExists`] and leave the file untouched.
    #[default]
    CreateNew,
    /// Truncate and replace the existing file.
    Overwrite,
}

impl WritePolicy {
    fn open(self, path: &Path) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.write(true);
        match self {
            Self::CreateNew => options.create_new(true),
            Self::Overwrite => options.create(true).truncate(true),
        };
        options.open(path)
    }
}

/// Appends `.txt` to `base`.
///
/// The extension is appended rather than substituted, so a base containing
/// a dot keeps it.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use graphgen_core::output_path;
///
/// assert_eq!(output_path(Path::new("graph")), Path::new("graph.txt"));
/// assert_eq!(output_path(Path::new("sets/v1.2")), Path::new("sets/v1.2.txt"));
/// ```
#[must_use]
pub fn output_path(base: &Path) -> PathBuf {
    let mut raw = OsString::from(base.as_os_str());
    raw.push(".");
    raw.push(OUTPUT_EXTENSION);
    PathBuf::from(raw)
}

/// Writes the edge-list text of `sample` to `path`.
///
/// Under [`WritePolicy::CreateNew`] the file is opened with exclusive
/// creation, so an existing file is never modified. The handle is flushed
/// before returning and closed when it leaves scope.
///
/// # Errors
/// Returns [`OutputError::AlreadyExists`] when exclusive creation finds an
/// existing file and [`OutputError::Io`] for any other failure.
#[instrument(
    name = "output.write_sample",
    err,
    skip(path, sample),
    fields(path = %path.display(), edges = sample.edge_count()),
)]
pub fn write_sample(
    path: &Path,
    sample: &GraphSample,
    policy: WritePolicy,
) -> Result<(), OutputError> {
    let file = policy.open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            OutputError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            OutputError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut writer = BufWriter::new(file);
    sample
        .write_to(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!(edges = sample.edge_count(), "sample written");
    Ok(())
}
