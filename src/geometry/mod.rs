//! Pure placement and hit-test math for the composition layers.

/// Cover-fit and contain-fit scaling.
pub mod fit;
/// Circle and rectangle hit tests.
pub mod hit;
/// Clip-path construction.
pub mod path;
