use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Options(#[from] getopts::Fail),
    #[error("invalid value {value:?} for --{name}")]
    InvalidOption { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
