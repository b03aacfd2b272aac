use std::path::{Path, PathBuf};

use crate::assets::decode::decode_image;
use crate::assets::store::AssetStore;
use crate::encode::png::export_timestamped;
use crate::foundation::core::{CanvasSize, Point};
use crate::foundation::error::VitrineResult;
use crate::interact::controller::{DragController, DragTarget};
use crate::interact::pointer::ViewMetrics;
use crate::render::painter::Painter;
use crate::render::pipeline::{FrameRGBA, render_frame};
use crate::scene::model::{LayoutProfile, SceneState, StyleParams};
use crate::scene::snapshot::{SettingsSnapshot, SettingsStore};
use crate::session::mirror::SpecMirror;

/// One payload from a paste event: a MIME type and its raw bytes.
#[derive(Debug, Clone)]
pub struct ClipboardItem {
    /// MIME type as reported by the paste source, e.g. `image/png`.
    pub mime: String,
    /// Raw payload bytes.
    pub bytes: Vec<u8>,
}

impl ClipboardItem {
    /// Build a clipboard item.
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }
}

/// Claim on a pending paste decode.
///
/// Each [`ComposerSession::begin_paste`] supersedes every ticket issued
/// before it; completing a superseded ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteTicket(u64);

/// The interactive composer: scene, assets, rendering and persistence
/// behind one run-to-completion API.
///
/// Every call finishes (including any synchronous re-render) before the
/// next is issued, so the session holds no locks. Mutating operations
/// persist their own settings snapshot.
pub struct ComposerSession {
    scene: SceneState,
    assets: AssetStore,
    painter: Painter,
    drag: DragController,
    store: SettingsStore,
    /// Raw spec text as last edited, persisted verbatim even when it is not
    /// valid JSON yet.
    spec_text: String,
    paste_seq: u64,
    mirrors: Vec<Box<dyn SpecMirror>>,
}

impl ComposerSession {
    /// Build a session from already-loaded parts.
    ///
    /// [`ComposerSession::bootstrap`] is the filesystem-backed path; this
    /// one serves embedders and tests that assemble assets by hand.
    pub fn new(assets: AssetStore, store: SettingsStore) -> Self {
        let snapshot = store.load();
        let spec_text = snapshot.spec_json.clone();
        let mut scene = snapshot.hydrate();

        let mut painter = Painter::new();
        if let Some(font) = assets.font_bytes() {
            if let Err(e) = painter.install_font(font) {
                tracing::warn!(error = %e, "footer font rejected, text runs disabled");
            }
        }

        if assets.logo().is_some() {
            scene.place_logo_default();
        }

        Self {
            scene,
            assets,
            painter,
            drag: DragController::new(),
            store,
            spec_text,
            paste_seq: 0,
            mirrors: Vec::new(),
        }
    }

    /// Load assets from `assets_dir`, the settings snapshot from
    /// `settings_path`, and assemble the session.
    ///
    /// Missing assets and a missing or corrupt settings file all fall back
    /// to defaults; the logo gets its one-time top-right placement when the
    /// asset loaded and the stored position is still the unplaced sentinel.
    #[tracing::instrument(skip(settings_path))]
    pub fn bootstrap(assets_dir: &Path, settings_path: impl Into<PathBuf>) -> VitrineResult<Self> {
        let assets = AssetStore::load_from_dir(assets_dir)?;
        Ok(Self::new(assets, SettingsStore::new(settings_path)))
    }

    /// The scene as it stands.
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// The loaded assets.
    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// Raw spec text as last edited.
    pub fn spec_text(&self) -> &str {
        &self.spec_text
    }

    /// Register a spec display surface; it receives the merged record after
    /// every render.
    pub fn add_mirror(&mut self, mirror: Box<dyn SpecMirror>) {
        self.mirrors.push(mirror);
    }

    /// Render the current scene and notify registered mirrors.
    #[tracing::instrument(skip(self))]
    pub fn render(&mut self) -> VitrineResult<FrameRGBA> {
        let frame = render_frame(&self.scene, &self.assets, &mut self.painter)?;
        for mirror in &mut self.mirrors {
            mirror.mirror(&self.scene.spec);
        }
        Ok(frame)
    }

    /// Begin a drag at a view-space point. Returns the grabbed layer.
    pub fn pointer_down(&mut self, p: Point, view: ViewMetrics) -> DragTarget {
        self.drag.pointer_down(&self.scene, view.to_canvas(p))
    }

    /// Apply drag motion. Re-renders when a layer moved and returns the
    /// fresh frame; `None` when no drag is active.
    pub fn pointer_move(&mut self, p: Point, view: ViewMetrics) -> VitrineResult<Option<FrameRGBA>> {
        if self.drag.pointer_move(&mut self.scene, view.to_canvas(p)) {
            return self.render().map(Some);
        }
        Ok(None)
    }

    /// End the active drag, persisting the moved layer's position.
    pub fn pointer_up(&mut self) -> VitrineResult<Option<DragTarget>> {
        let ended = self.drag.pointer_up();
        if ended.is_some() {
            self.persist()?;
        }
        Ok(ended)
    }

    /// Claim the next paste slot. Later claims supersede earlier ones.
    pub fn begin_paste(&mut self) -> PasteTicket {
        self.paste_seq += 1;
        PasteTicket(self.paste_seq)
    }

    /// Decode and install a claimed paste, centered on the canvas.
    ///
    /// A superseded ticket is discarded without touching the scene, as is a
    /// payload that fails to decode. Returns the re-rendered frame when the
    /// image was installed.
    pub fn complete_paste(
        &mut self,
        ticket: PasteTicket,
        bytes: &[u8],
    ) -> VitrineResult<Option<FrameRGBA>> {
        if ticket.0 != self.paste_seq {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.paste_seq,
                "discarding superseded paste"
            );
            return Ok(None);
        }
        let image = decode_image(bytes)?;
        self.scene.install_pasted(image, ticket.0);
        self.persist()?;
        self.render().map(Some)
    }

    /// Install the first image payload among `items`, if any.
    ///
    /// Non-image payloads are skipped silently. Returns `None` when nothing
    /// pasteable was found.
    pub fn paste(&mut self, items: &[ClipboardItem]) -> VitrineResult<Option<FrameRGBA>> {
        let Some(item) = items.iter().find(|i| i.mime.contains("image")) else {
            return Ok(None);
        };
        let ticket = self.begin_paste();
        self.complete_paste(ticket, &item.bytes)
    }

    /// Store the edited spec text and fold valid JSON into the record.
    ///
    /// The raw text is persisted either way so an in-progress edit survives
    /// a reload; invalid JSON leaves the record untouched and the parse
    /// error is returned.
    pub fn edit_spec_text(&mut self, text: &str) -> VitrineResult<()> {
        self.spec_text = text.to_owned();
        let parsed = self.scene.spec.merge_json(text);
        if let Err(e) = &parsed {
            tracing::debug!(error = %e, "spec text not yet valid JSON");
        }
        self.persist()?;
        parsed
    }

    /// Resize the canvas. Layer positions are kept as-is.
    pub fn set_canvas_size(&mut self, size: CanvasSize) -> VitrineResult<()> {
        self.scene.canvas = size;
        self.persist()
    }

    /// Replace the subject styling controls.
    pub fn set_style(&mut self, style: StyleParams) -> VitrineResult<()> {
        self.scene.style = style;
        self.persist()
    }

    /// Switch the layout profile.
    pub fn set_layout(&mut self, layout: LayoutProfile) -> VitrineResult<()> {
        self.scene.layout = layout;
        self.persist()
    }

    /// Render and write `vitrine-<millis>.png` under `dir`. Returns the
    /// written path.
    #[tracing::instrument(skip(self))]
    pub fn export_png(&mut self, dir: &Path) -> VitrineResult<PathBuf> {
        let frame = self.render()?;
        export_timestamped(dir, &frame)
    }

    fn persist(&self) -> VitrineResult<()> {
        let result = self
            .store
            .save(&SettingsSnapshot::capture(&self.scene, &self.spec_text));
        if let Err(e) = &result {
            tracing::warn!(error = %e, "settings snapshot not written");
        }
        result
    }
}
