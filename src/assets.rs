//! Resolution of logical asset names to decoded images.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::view::Node;

const BUNDLED_AVATAR: &[u8] = include_bytes!("../assets/avatar.png");
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Stable logical name of a bundled resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {id} from {}: {source}", .path.display())]
    Read {
        id: AssetId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode asset {id}: {source}")]
    Decode {
        id: AssetId,
        #[source]
        source: image::ImageError,
    },
}

/// Turns an [`AssetId`] into image data. `Ok(None)` means the asset does not exist.
pub trait AssetResolver {
    fn resolve(&self, id: &AssetId) -> Result<Option<DynamicImage>, AssetError>;
}

fn decode(id: &AssetId, bytes: &[u8]) -> Result<DynamicImage, AssetError> {
    image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
        id: id.clone(),
        source,
    })
}

/// Assets compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledAssets;

impl AssetResolver for BundledAssets {
    fn resolve(&self, id: &AssetId) -> Result<Option<DynamicImage>, AssetError> {
        match id.name() {
            "avatar" => decode(id, BUNDLED_AVATAR).map(Some),
            _ => Ok(None),
        }
    }
}

/// Looks up `<root>/<name>.<ext>` for each known image extension.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn find(&self, id: &AssetId) -> Option<PathBuf> {
        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", id.name(), ext)))
            .find(|path| path.is_file())
    }
}

impl AssetResolver for DirectoryAssets {
    fn resolve(&self, id: &AssetId) -> Result<Option<DynamicImage>, AssetError> {
        let Some(path) = self.find(id) else {
            return Ok(None);
        };
        debug!(%id, path = %path.display(), "reading asset");
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Read {
            id: id.clone(),
            path: path.clone(),
            source,
        })?;
        decode(id, &bytes).map(Some)
    }
}

/// In-memory assets, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct StaticAssets {
    images: HashMap<AssetId, DynamicImage>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: AssetId, image: DynamicImage) -> Self {
        self.images.insert(id, image);
        self
    }
}

impl AssetResolver for StaticAssets {
    fn resolve(&self, id: &AssetId) -> Result<Option<DynamicImage>, AssetError> {
        Ok(self.images.get(id).cloned())
    }
}

/// Images referenced by a view tree, decoded once at mount.
#[derive(Debug, Default, Clone)]
pub struct LoadedAssets {
    images: HashMap<AssetId, DynamicImage>,
}

impl LoadedAssets {
    /// Resolves every image node in `tree`. Missing or broken assets are
    /// logged and left out, so they render as blank space.
    pub fn preload(tree: &Node, resolver: &dyn AssetResolver) -> Self {
        let mut images = HashMap::new();
        tree.walk(&mut |node| {
            let Node::Image(image) = node else {
                return;
            };
            if images.contains_key(&image.asset) {
                return;
            }
            match resolver.resolve(&image.asset) {
                Ok(Some(decoded)) => {
                    info!(
                        id = %image.asset,
                        width = decoded.width(),
                        height = decoded.height(),
                        "resolved asset"
                    );
                    images.insert(image.asset.clone(), decoded);
                }
                Ok(None) => warn!(id = %image.asset, "asset not found, rendering placeholder"),
                Err(e) => {
                    warn!(id = %image.asset, error = %e, "asset unusable, rendering placeholder")
                }
            }
        });
        Self { images }
    }

    pub fn get(&self, id: &AssetId) -> Option<&DynamicImage> {
        self.images.get(id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::view::profile_card_view;

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255])))
    }

    #[test]
    fn test_bundled_avatar_decodes() {
        let image = BundledAssets
            .resolve(&AssetId::new("avatar"))
            .unwrap()
            .unwrap();
        assert_eq!((image.width(), image.height()), (64, 64));
        assert!(BundledAssets.resolve(&AssetId::new("banner")).unwrap().is_none());
    }

    #[test]
    fn test_directory_assets() {
        let dir = tempfile::tempdir().unwrap();
        solid(4, 2).save(dir.path().join("avatar.png")).unwrap();

        let assets = DirectoryAssets::new(dir.path());
        let image = assets.resolve(&AssetId::new("avatar")).unwrap().unwrap();
        assert_eq!((image.width(), image.height()), (4, 2));
        assert!(assets.resolve(&AssetId::new("missing")).unwrap().is_none());
    }

    #[test]
    fn test_directory_assets_bad_image() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("avatar.png"), b"not a png").unwrap();

        let err = DirectoryAssets::new(dir.path())
            .resolve(&AssetId::new("avatar"))
            .unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn test_preload_collects_tree_images() {
        let tree = profile_card_view("A", "B", "C");
        let resolver = StaticAssets::new().with(AssetId::new("avatar"), solid(3, 3));
        let loaded = LoadedAssets::preload(&tree, &resolver);
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get(&AssetId::new("avatar")).is_some());
    }

    #[test]
    fn test_preload_tolerates_missing_asset() {
        let tree = profile_card_view("A", "B", "C");
        let loaded = LoadedAssets::preload(&tree, &StaticAssets::new());
        assert!(loaded.is_empty());
    }
}
