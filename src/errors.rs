use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv export failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv output was not valid utf-8")]
    CsvEncoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
