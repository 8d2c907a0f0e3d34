use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("flag height must be at least 1")]
    ZeroHeight,

    #[error("config error: {0}")]
    Config(String),
}
