use std::io;

use thiserror::Error;

use crate::decode::DecodeError;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Decode(#[from] DecodeError),
}
