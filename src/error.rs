use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("style key `{key}` is not a distance: found {found}")]
    Configuration { key: String, found: String },

    #[error("{event} received while no gesture is being tracked")]
    GestureState { event: &'static str },

    #[error("could not request an animation frame: {reason}")]
    FrameRequest { reason: String },

    #[error("could not register `{event}` listener: {reason}")]
    ListenerRegistration { event: &'static str, reason: String },

    #[error("invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn configuration(key: &str, found: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.to_string(),
            found: found.into(),
        }
    }
}
