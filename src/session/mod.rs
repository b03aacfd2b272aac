//! The interactive composer session.
//!
//! [`composer::ComposerSession`] is the run-to-completion API an embedder
//! drives: pointer events, paste intake, spec edits and export all pass
//! through it, and every mutating operation persists its own settings
//! snapshot.

/// Session facade over scene, assets, rendering and persistence.
pub mod composer;
/// Spec display surfaces notified after each render.
pub mod mirror;
