use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("environment variables {0} and/or {1} are not set")]
    MissingCredentials(&'static str, &'static str),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("page driver error: {0}")]
    Driver(String),
}

pub type Result<T> = std::result::Result<T, Error>;
