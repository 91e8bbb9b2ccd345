use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("input must have 'IP' and 'Results' columns; found: {found:?}")]
    MissingColumns { found: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
