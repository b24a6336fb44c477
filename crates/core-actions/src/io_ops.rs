//! File IO helpers used at startup and by the save command.
//!
//! Synchronous and minimal: the controller calls these between input events.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use core_state::EditorState;
use core_text::{Buffer, TextError, codec};
use thiserror::Error;

/// Fatal load failures; the editor does not start on either.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: TextError,
    },
}

/// Open `path` into a buffer. A missing file is created empty.
pub fn open_file(path: &Path) -> Result<Buffer, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)
                .map_err(io_err)?;
            tracing::info!(target: "io", path = %path.display(), "file_created");
            return Ok(Buffer::new());
        }
        Err(e) => {
            tracing::error!(target: "io", ?e, "file_open_error");
            return Err(io_err(e));
        }
    };
    codec::read(file).map_err(|e| match e {
        TextError::Io(source) => io_err(source),
        decode => {
            tracing::error!(target: "io", error = %decode, "decode_failed");
            LoadError::Decode {
                path: path.to_path_buf(),
                source: decode,
            }
        }
    })
}

/// Result of a write attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteFileResult {
    Success { bytes: usize },
    NoFilename,
    Error,
}

/// Write the buffer to its associated file name. Every line is terminated by
/// `\n`. Success clears the dirty flag.
pub fn write_file(state: &mut EditorState) -> WriteFileResult {
    let Some(path) = state.file_name.clone() else {
        return WriteFileResult::NoFilename;
    };
    let written = File::create(&path)
        .map_err(TextError::from)
        .and_then(|f| codec::write(state.buffer(), std::io::BufWriter::new(f)));
    match written {
        Ok(bytes) => {
            tracing::info!(target: "io", bytes, lines = state.buffer().line_count(), "file_written");
            state.mark_saved(bytes);
            WriteFileResult::Success { bytes }
        }
        Err(e) => {
            tracing::error!(target: "io", error = %e, "file_write_error");
            WriteFileResult::Error
        }
    }
}
