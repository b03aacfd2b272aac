//! Pointer interaction: view-to-canvas mapping and the drag state machine.

/// Drag state machine with layer-precedence hit testing.
pub mod controller;
/// View-space to canvas-space coordinate mapping.
pub mod pointer;
