//! Frame export.
//!
//! Frames leave the pipeline premultiplied; PNG wants straight alpha, so
//! encoding unpremultiplies a copy before it hits the encoder.

/// PNG encoding and timestamped export.
pub mod png;
