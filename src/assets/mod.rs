//! Startup assets: image decode, CSS color parsing, and the optional
//! background/logo/font store.

/// CSS color string parsing.
pub mod color;
/// Bytes-to-bitmap decode.
pub mod decode;
/// Optional asset slots probed from fixed relative paths.
pub mod store;
