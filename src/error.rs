use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
