use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("invalid value {value:?} for config key `{key}`")]
    InvalidConfig { key: &'static str, value: String },
    #[error("unknown scene preset `{0}`")]
    UnknownScene(String),
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("gpu error: {0}")]
    Gpu(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
