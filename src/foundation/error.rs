/// Convenience result type used across vitrine.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Top-level error taxonomy used by composer APIs.
///
/// Most recoverable conditions (missing assets, unparsable spec edits) never
/// surface as errors at all; the pipeline degrades and logs instead. These
/// variants cover the cases a caller can actually act on.
#[derive(thiserror::Error, Debug)]
pub enum VitrineError {
    /// Invalid scene, style, or canvas data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An image payload could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The spec text is not a JSON object.
    #[error("spec parse error: {0}")]
    SpecParse(String),

    /// The settings snapshot could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// A raster pass failed.
    #[error("render error: {0}")]
    Render(String),

    /// Frame encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitrineError {
    /// Build a [`VitrineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VitrineError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`VitrineError::SpecParse`] value.
    pub fn spec_parse(msg: impl Into<String>) -> Self {
        Self::SpecParse(msg.into())
    }

    /// Build a [`VitrineError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`VitrineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`VitrineError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            VitrineError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(VitrineError::decode("x").to_string().contains("decode error:"));
        assert!(
            VitrineError::spec_parse("x")
                .to_string()
                .contains("spec parse error:")
        );
        assert!(
            VitrineError::storage("x")
                .to_string()
                .contains("storage error:")
        );
        assert!(VitrineError::render("x").to_string().contains("render error:"));
        assert!(VitrineError::encode("x").to_string().contains("encode error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = VitrineError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
