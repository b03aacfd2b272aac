use std::path::Path;
use std::sync::Arc;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::foundation::error::VitrineResult;

/// Filenames probed for the backdrop photo, in priority order.
pub const BACKGROUND_CANDIDATES: [&str; 2] = ["bg.png", "bg.jpg"];
/// Filenames probed for the circular logo badge.
pub const LOGO_CANDIDATES: [&str; 2] = ["logo.png", "logo.jpg"];
/// Filenames probed for the footer font.
pub const FONT_CANDIDATES: [&str; 2] = ["footer.ttf", "footer.otf"];

/// Decoded assets a scene renders with.
///
/// Every slot is optional: a missing background falls back to a solid fill, a
/// missing logo or font simply skips that layer.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    background: Option<PreparedImage>,
    logo: Option<PreparedImage>,
    font_bytes: Option<Arc<Vec<u8>>>,
}

impl AssetStore {
    /// A store with no assets at all. Rendering still works.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Probe `dir` for the well-known asset filenames and decode whatever is
    /// present. Files that fail to decode are skipped with a warning rather
    /// than failing the whole load.
    pub fn load_from_dir(dir: &Path) -> VitrineResult<Self> {
        let mut store = Self::empty();

        if let Some((name, bytes)) = probe(dir, &BACKGROUND_CANDIDATES) {
            match decode_image(&bytes) {
                Ok(img) => {
                    tracing::debug!(file = %name, width = img.width, height = img.height, "loaded background");
                    store.background = Some(img);
                }
                Err(e) => tracing::warn!(file = %name, error = %e, "skipping background"),
            }
        } else {
            tracing::debug!(dir = %dir.display(), "no background asset found");
        }

        if let Some((name, bytes)) = probe(dir, &LOGO_CANDIDATES) {
            match decode_image(&bytes) {
                Ok(img) => {
                    tracing::debug!(file = %name, width = img.width, height = img.height, "loaded logo");
                    store.logo = Some(img);
                }
                Err(e) => tracing::warn!(file = %name, error = %e, "skipping logo"),
            }
        }

        if let Some((name, bytes)) = probe(dir, &FONT_CANDIDATES) {
            tracing::debug!(file = %name, len = bytes.len(), "loaded footer font");
            store.font_bytes = Some(Arc::new(bytes));
        }

        Ok(store)
    }

    pub fn background(&self) -> Option<&PreparedImage> {
        self.background.as_ref()
    }

    pub fn logo(&self) -> Option<&PreparedImage> {
        self.logo.as_ref()
    }

    pub fn font_bytes(&self) -> Option<&Arc<Vec<u8>>> {
        self.font_bytes.as_ref()
    }

    pub fn with_background(mut self, image: PreparedImage) -> Self {
        self.background = Some(image);
        self
    }

    pub fn with_logo(mut self, image: PreparedImage) -> Self {
        self.logo = Some(image);
        self
    }

    pub fn with_font(mut self, bytes: Vec<u8>) -> Self {
        self.font_bytes = Some(Arc::new(bytes));
        self
    }
}

/// Return the first candidate filename that exists in `dir`, with its bytes.
fn probe(dir: &Path, candidates: &[&str]) -> Option<(String, Vec<u8>)> {
    for name in candidates {
        let path = dir.join(name);
        if path.is_file() {
            match std::fs::read(&path) {
                Ok(bytes) => return Some(((*name).to_owned(), bytes)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read asset");
                }
            }
        }
    }
    None
}
