//! Errors raised while reading scenes and writing frames.
//!
//! Rendering itself cannot fail; only the parts touching the file system can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error("mesh {}, line {line}: {message}", path.display())]
    MeshSyntax {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("mesh {}: polygon refers to vertex {index}, but only {count} are declared", path.display())]
    MeshIndex { path: PathBuf, index: usize, count: usize },

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

impl SceneError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SceneError::Io {
            path: path.into(),
            source,
        }
    }
}
