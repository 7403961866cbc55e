use thiserror::Error;

/// Crate-wide error type. Validation variants cover bad user input and are
/// always recoverable; storage variants wrap the underlying engines.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown month: '{0}'")]
    UnknownMonth(String),

    #[error("unknown category: '{0}'")]
    UnknownCategory(String),

    #[error("unknown payment mode: '{0}'")]
    UnknownPaymentMode(String),

    #[error("unknown query: '{0}'")]
    UnknownQuery(String),

    #[error("only single read-only SELECT statements are allowed")]
    NotReadOnly,

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors caused by user input rather than the storage layer.
    pub(crate) fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownMonth(_)
                | Self::UnknownCategory(_)
                | Self::UnknownPaymentMode(_)
                | Self::UnknownQuery(_)
                | Self::NotReadOnly
        )
    }
}
