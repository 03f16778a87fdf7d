use thiserror::Error;

#[derive(Error, Debug)]
pub enum KlcError {
    #[error("layout file has no LOCALENAME declaration")]
    MissingLocaleName,

    #[error("invalid UTF-16 data at offset {0}")]
    InvalidUtf16(usize),

    #[error("invalid UTF-8 data at offset {0}")]
    InvalidUtf8(usize),

    #[error("truncated UTF-16 data: {0} bytes")]
    TruncatedUtf16(usize),
}

pub type Result<T> = std::result::Result<T, KlcError>;
