use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("scraping error: {0}")]
    Scraping(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, Error>;
