use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Indicator(#[from] indicators::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
