//! CPU rendering of a scene to an RGBA frame.
//!
//! The pipeline is deterministic: the same scene and assets always produce
//! the same bytes. Vector drawing goes through `vello_cpu`; the blur, mask
//! and compositing passes between layers operate directly on premultiplied
//! RGBA8 buffers.

/// Frosted-glass spec footer: panel, text and spec glyphs.
pub mod footer;
/// Stroke-built outline glyphs for the spec grid.
pub mod glyphs;
/// Painter holding the reusable render context and pixel scratch buffers.
pub mod painter;
/// The layer-by-layer frame pipeline.
pub mod pipeline;
/// Premultiplied-RGBA8 pixel passes: blur, mask, compositing.
pub(crate) mod surface;
/// Text layout and glyph drawing via parley.
pub mod text;
