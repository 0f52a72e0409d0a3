/// Convenience result type used across softvo.
pub type VoResult<T> = Result<T, VoError>;

/// Top-level error taxonomy used by the video-output APIs.
#[derive(thiserror::Error, Debug)]
pub enum VoError {
    /// The backend could not be brought up or no usable pixel encoding exists.
    #[error("initialization error: {0}")]
    Init(String),

    /// Invalid user-provided configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A per-frame draw operation failed; the frame is dropped, playback continues.
    #[error("draw error: {0}")]
    Draw(String),

    /// A frame or surface format outside the negotiated set was supplied.
    #[error("unsupported format: {0}")]
    Unsupported(String),

    /// Wrapped lower-level error from the backend or dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VoError {
    /// Build a [`VoError::Init`] value.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// Build a [`VoError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`VoError::Draw`] value.
    pub fn draw(msg: impl Into<String>) -> Self {
        Self::Draw(msg.into())
    }

    /// Build a [`VoError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}
