use std::path::PathBuf;

use tampopo_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("film id '{id}' is not a single directory name")]
    InvalidFilmId { id: String },
    #[error("invalid catalog record: {0}")]
    Model(#[from] ModelError),
}
