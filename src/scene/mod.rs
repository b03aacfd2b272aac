//! Scene state: the document being composed.
//!
//! A [`model::SceneState`] owns everything the renderer needs for one card:
//! canvas size, layer positions, styling controls, the machine-spec record
//! feeding the footer, and the pasted subject image. [`snapshot`] maps that
//! state to and from the persisted settings file.

/// Mutable composition state and its styling controls.
pub mod model;
/// Persisted settings snapshot and the file-backed store.
pub mod snapshot;
/// Key/value record of machine specs shown in the footer.
pub mod spec_record;
