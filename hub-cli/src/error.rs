use std::io;

use data_error::HubError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't determine the configuration directory")]
    ConfigDirNotFound,

    #[error("Could not load config: {0}")]
    ConfigLoadError(String),

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("Could not load catalog: {0}")]
    CatalogLoadError(String),

    #[error("Unknown badge: {0}")]
    UnknownBadge(String),

    #[error("Nothing to detect: empty input")]
    EmptyInput,

    #[error("Premium API key required for image generation")]
    PremiumKeyRequired,

    #[error("Could not write image: {0}")]
    ImageWriteError(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    HubError(#[from] HubError),
}
