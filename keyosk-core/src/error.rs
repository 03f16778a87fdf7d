use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("layout parse error: {0}")]
    Klc(#[from] crate::klc::KlcError),

    #[error("layout source error: {0}")]
    Source(#[from] crate::source::SourceError),

    #[error("no languages configured")]
    NoLanguages,

    #[error("unknown language index: {0}")]
    UnknownLanguage(usize),

    #[error("stale layout load: generation {requested}, current {current}")]
    StaleLoad { requested: u64, current: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
