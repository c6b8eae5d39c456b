//! Renderer errors.

use display_canvas::EncodeError;
use thiserror::Error;

/// Failure outside the render pass itself.
///
/// Rendering never fails for bad widget data or bad widget options; those
/// become placeholders. Only reading a screen definition and encoding the
/// finished frame can fail.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The screen definition is not valid JSON for [`crate::ScreenConfig`].
    #[error("invalid screen configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The frame could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
