use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load configuration")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Window(#[from] indicators::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
