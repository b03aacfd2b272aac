use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::core::{CanvasSize, Point, Vec2};
use crate::foundation::error::{VitrineError, VitrineResult};
use crate::scene::model::{
    DEFAULT_BORDER_RADIUS, DEFAULT_IMAGE_SIZE, DEFAULT_SHADOW_COLOR, DEFAULT_SHADOW_STRENGTH,
    LayoutProfile, SceneState, StyleParams,
};
use crate::scene::spec_record::SAMPLE_SPEC_JSON;

/// A persisted 2D position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for StoredPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<StoredPoint> for Point {
    fn from(p: StoredPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

/// The settings file as written to disk.
///
/// Numeric controls are stored as display strings, the way the original
/// settings UI produced them; hydration parses them back with per-field
/// fallbacks so a hand-edited or partially corrupt file still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSnapshot {
    #[serde(rename = "canvasWidth")]
    pub canvas_width: String,
    #[serde(rename = "canvasHeight")]
    pub canvas_height: String,
    #[serde(rename = "imageSize")]
    pub image_size: String,
    #[serde(rename = "borderRadius")]
    pub border_radius: String,
    #[serde(rename = "shadowColor")]
    pub shadow_color: String,
    #[serde(rename = "shadowStrength")]
    pub shadow_strength: String,
    #[serde(rename = "bgPos")]
    pub bg_pos: StoredPoint,
    #[serde(rename = "logoPos")]
    pub logo_pos: StoredPoint,
    /// Pasted-image position. Absent in snapshots written before image
    /// drags were persisted.
    #[serde(rename = "imgPos")]
    pub img_pos: Option<StoredPoint>,
    #[serde(rename = "specJSON")]
    pub spec_json: String,
    pub layout: LayoutProfile,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            canvas_width: CanvasSize::default().width.to_string(),
            canvas_height: CanvasSize::default().height.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            border_radius: DEFAULT_BORDER_RADIUS.to_string(),
            shadow_color: DEFAULT_SHADOW_COLOR.to_owned(),
            shadow_strength: DEFAULT_SHADOW_STRENGTH.to_string(),
            bg_pos: StoredPoint::default(),
            logo_pos: StoredPoint::default(),
            img_pos: None,
            spec_json: SAMPLE_SPEC_JSON.to_owned(),
            layout: LayoutProfile::default(),
        }
    }
}

impl SettingsSnapshot {
    /// Build a scene from the snapshot, substituting defaults for any field
    /// that fails to parse.
    pub fn hydrate(&self) -> SceneState {
        let defaults = CanvasSize::default();
        let width = parse_or(&self.canvas_width, defaults.width);
        let height = parse_or(&self.canvas_height, defaults.height);
        let canvas = CanvasSize::new(width, height).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored canvas size rejected, using default");
            defaults
        });

        let style = StyleParams {
            image_size: parse_or(&self.image_size, DEFAULT_IMAGE_SIZE),
            border_radius: parse_or(&self.border_radius, DEFAULT_BORDER_RADIUS),
            shadow_color: self.shadow_color.clone(),
            shadow_strength: parse_or(&self.shadow_strength, DEFAULT_SHADOW_STRENGTH),
        };

        let mut scene = SceneState {
            canvas,
            style,
            background_offset: Vec2::new(self.bg_pos.x, self.bg_pos.y),
            logo_position: self.logo_pos.into(),
            pasted_image_position: self.img_pos.map_or(canvas.center(), Point::from),
            layout: self.layout,
            ..SceneState::default()
        };

        if let Err(e) = scene.spec.merge_json(&self.spec_json) {
            tracing::debug!(error = %e, "stored spec JSON invalid, footer uses fallbacks");
        }
        scene
    }

    /// Snapshot the current scene. `spec_text` is the raw user-edited JSON,
    /// persisted verbatim so an in-progress edit survives a reload.
    pub fn capture(scene: &SceneState, spec_text: &str) -> Self {
        Self {
            canvas_width: scene.canvas.width.to_string(),
            canvas_height: scene.canvas.height.to_string(),
            image_size: scene.style.image_size.to_string(),
            border_radius: scene.style.border_radius.to_string(),
            shadow_color: scene.style.shadow_color.clone(),
            shadow_strength: scene.style.shadow_strength.to_string(),
            bg_pos: StoredPoint {
                x: scene.background_offset.x,
                y: scene.background_offset.y,
            },
            logo_pos: scene.logo_position.into(),
            img_pos: Some(scene.pasted_image_position.into()),
            spec_json: spec_text.to_owned(),
            layout: scene.layout,
        }
    }
}

fn parse_or(s: &str, default: u32) -> u32 {
    s.trim().parse().unwrap_or(default)
}

/// File-backed store for [`SettingsSnapshot`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, falling back to defaults when the file is missing
    /// or unreadable. A corrupt settings file never blocks startup.
    pub fn load(&self) -> SettingsSnapshot {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no settings file, using defaults");
                return SettingsSnapshot::default();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "settings file unparsable, using defaults");
                SettingsSnapshot::default()
            }
        }
    }

    pub fn save(&self, snapshot: &SettingsSnapshot) -> VitrineResult<()> {
        let text = serde_json::to_string_pretty(snapshot)
            .map_err(|e| VitrineError::storage(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    VitrineError::storage(format!("create {}: {e}", parent.display()))
                })?;
            }
        }
        std::fs::write(&self.path, text)
            .map_err(|e| VitrineError::storage(format!("write {}: {e}", self.path.display())))
    }
}
