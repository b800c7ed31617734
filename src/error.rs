use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("failed to start renderer '{program}': {source}")]
    RendererStart {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("renderer '{program}' exited with {status}: {stderr}")]
    RendererFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("invalid renderer payload: {0}")]
    InvalidPayload(String),

    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

pub type Result<T> = std::result::Result<T, CoverError>;
