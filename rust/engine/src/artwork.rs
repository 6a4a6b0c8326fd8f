//! Artwork resources and the loader seam.
//!
//! The engine never decodes images. It asks an [`ArtworkLoader`] for a
//! resource at a path and later hands the resource back for release.
//! [`ResourceHandle`] is neither `Clone` nor `Copy`: releasing consumes it,
//! so a handle can be owned by one revealed card and released once.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::deck::CardIdentity;
use crate::errors::ArtworkError;

/// Opaque id of a loaded artwork resource (a texture, a decoded buffer...).
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    /// Mint a handle. Only loaders should call this.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A loaded resource with its pixel dimensions.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub handle: ResourceHandle,
    pub width: u32,
    pub height: u32,
}

/// Image loading and release, supplied by the host.
pub trait ArtworkLoader {
    fn load(&mut self, path: &Path) -> Result<Artwork, ArtworkError>;
    fn release(&mut self, handle: ResourceHandle);
}

impl<L: ArtworkLoader + ?Sized> ArtworkLoader for &mut L {
    fn load(&mut self, path: &Path) -> Result<Artwork, ArtworkError> {
        (**self).load(path)
    }

    fn release(&mut self, handle: ResourceHandle) {
        (**self).release(handle)
    }
}

/// Where artwork files live: `<root>/<English name>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkSource {
    pub root: PathBuf,
    pub ext: String,
}

impl Default for ArtworkSource {
    fn default() -> Self {
        Self {
            root: PathBuf::from("Tarot"),
            ext: "jpeg".to_string(),
        }
    }
}

impl ArtworkSource {
    pub fn new(root: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ext: ext.into(),
        }
    }

    pub fn path_for(&self, card: &CardIdentity) -> PathBuf {
        card.artwork_path(&self.root, &self.ext)
    }
}

/// In-memory loader that serves fixed dimensions for registered paths and
/// keeps a ledger of every load and release.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    images: HashMap<PathBuf, (u32, u32)>,
    serve_all: Option<(u32, u32)>,
    next_id: u64,
    live: BTreeSet<u64>,
    loads: usize,
    releases: Vec<u64>,
    double_releases: usize,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `width`x`height` for any path.
    pub fn serving_all(width: u32, height: u32) -> Self {
        Self {
            serve_all: Some((width, height)),
            ..Self::default()
        }
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, width: u32, height: u32) {
        self.images.insert(path.into(), (width, height));
    }

    /// Handles loaded and not yet released.
    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Released handle ids in release order.
    pub fn releases(&self) -> &[u64] {
        &self.releases
    }

    pub fn double_releases(&self) -> usize {
        self.double_releases
    }
}

impl ArtworkLoader for MemoryLoader {
    fn load(&mut self, path: &Path) -> Result<Artwork, ArtworkError> {
        let (width, height) = self
            .images
            .get(path)
            .copied()
            .or(self.serve_all)
            .ok_or_else(|| ArtworkError::NotFound {
                path: path.to_path_buf(),
            })?;
        self.next_id += 1;
        self.loads += 1;
        self.live.insert(self.next_id);
        Ok(Artwork {
            handle: ResourceHandle::new(self.next_id),
            width,
            height,
        })
    }

    fn release(&mut self, handle: ResourceHandle) {
        if !self.live.remove(&handle.id()) {
            self.double_releases += 1;
        }
        self.releases.push(handle.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_loader_serves_registered_paths_only() {
        let mut loader = MemoryLoader::new();
        loader.insert("Tarot/The Fool.jpeg", 300, 500);
        let art = loader.load(Path::new("Tarot/The Fool.jpeg")).unwrap();
        assert_eq!((art.width, art.height), (300, 500));
        assert!(matches!(
            loader.load(Path::new("Tarot/Death.jpeg")),
            Err(ArtworkError::NotFound { .. })
        ));
        assert_eq!(loader.live(), 1);
    }

    #[test]
    fn memory_loader_tracks_release() {
        let mut loader = MemoryLoader::serving_all(1, 1);
        let a = loader.load(Path::new("a")).unwrap();
        let b = loader.load(Path::new("b")).unwrap();
        assert_ne!(a.handle, b.handle);
        loader.release(a.handle);
        assert_eq!(loader.live(), 1);
        loader.release(ResourceHandle::new(1));
        assert_eq!(loader.double_releases(), 1);
    }

    #[test]
    fn artwork_source_default_matches_asset_layout() {
        let source = ArtworkSource::default();
        assert_eq!(source.root, PathBuf::from("Tarot"));
        assert_eq!(source.ext, "jpeg");
    }
}
