//! Vitrine composes layered showcase cards on the CPU.
//!
//! A card is a backdrop photo, a pasted subject image with rounded corners
//! and an optional drop shadow, a circular logo badge, and a frosted-glass
//! footer that prints a machine-spec record. Rendering is deterministic:
//! the same scene and assets always produce the same RGBA bytes.
//!
//! The public API is session-oriented:
//!
//! - [`ComposerSession::bootstrap`] a session from an assets directory and
//!   a settings file, or assemble one from parts
//! - Drive it with pointer, paste and spec-edit events
//! - [`ComposerSession::render`] frames, or [`ComposerSession::export_png`]
//!   straight to a timestamped file

#![forbid(unsafe_code)]

/// Asset decode, CSS color parsing and the on-disk asset store.
pub mod assets;
/// PNG encoding and export.
pub mod encode;
/// Core value types and the crate-wide error taxonomy.
pub mod foundation;
/// Pure placement and hit-test math.
pub mod geometry;
/// Pointer mapping and the drag state machine.
pub mod interact;
/// The CPU render pipeline.
pub mod render;
/// Scene state, spec record and settings persistence.
pub mod scene;
/// The session-oriented composer API.
pub mod session;

pub use crate::assets::color::CssColor;
pub use crate::assets::decode::PreparedImage;
pub use crate::assets::store::AssetStore;
pub use crate::encode::png::{encode_png, export_timestamped, write_png};
pub use crate::foundation::core::{Affine, BezPath, CanvasSize, Point, Rect, Vec2};
pub use crate::foundation::error::{VitrineError, VitrineResult};
pub use crate::interact::controller::{DragController, DragState, DragTarget};
pub use crate::interact::pointer::ViewMetrics;
pub use crate::render::painter::Painter;
pub use crate::render::pipeline::{FrameRGBA, render_frame};
pub use crate::scene::model::{LayoutProfile, PastedImage, SceneState, StyleParams};
pub use crate::scene::snapshot::{SettingsSnapshot, SettingsStore, StoredPoint};
pub use crate::scene::spec_record::{SAMPLE_SPEC_JSON, SpecRecord};
pub use crate::session::composer::{ClipboardItem, ComposerSession, PasteTicket};
pub use crate::session::mirror::{InMemoryMirror, SpecMirror};
