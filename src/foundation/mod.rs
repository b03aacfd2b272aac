//! Shared value types and the crate-wide error taxonomy.

/// Core scene value types and geometry re-exports.
pub mod core;
/// Error enum and result alias.
pub mod error;
