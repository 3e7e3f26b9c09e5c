use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid window configuration: {reason}")]
    Configuration { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
