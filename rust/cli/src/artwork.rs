//! Filesystem artwork loader.
//!
//! Decodes the card image from disk and reports its pixel size. The
//! pixels are dropped after decoding; the terminal only lists which
//! artwork would be drawn and how.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{GenericImageView, ImageReader};
use tarot_engine::artwork::{Artwork, ArtworkLoader, ResourceHandle};
use tarot_engine::errors::ArtworkError;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct FsArtworkLoader {
    next_id: u64,
    live: HashMap<u64, PathBuf>,
}

impl FsArtworkLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loaded, unreleased resources.
    pub fn live(&self) -> usize {
        self.live.len()
    }
}

fn io_error(path: &Path, e: std::io::Error) -> ArtworkError {
    match e.kind() {
        ErrorKind::NotFound => ArtworkError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArtworkError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    }
}

impl ArtworkLoader for FsArtworkLoader {
    fn load(&mut self, path: &Path) -> Result<Artwork, ArtworkError> {
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| io_error(path, e))?;
        // Anything past opening the file counts as a bad image, including
        // a stream that ends early.
        let decoded = reader.decode().map_err(|e| ArtworkError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let (width, height) = decoded.dimensions();

        self.next_id += 1;
        self.live.insert(self.next_id, path.to_path_buf());
        debug!(handle = self.next_id, path = %path.display(), width, height, "artwork loaded");
        Ok(Artwork {
            handle: ResourceHandle::new(self.next_id),
            width,
            height,
        })
    }

    fn release(&mut self, handle: ResourceHandle) {
        if self.live.remove(&handle.id()).is_none() {
            warn!(handle = handle.id(), "release of unknown artwork handle");
        }
    }
}
