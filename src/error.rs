use thiserror::Error;

/// Error taxonomy for the data pipeline.
///
/// There are exactly two kinds of failure: the source file could not be
/// read at all (`Load`), or it was readable but does not match the expected
/// schema — a missing column or a cell that is not a percentage (`Format`).
/// Load failures abort the pipeline; the caller decides how to surface the
/// message, but never receives a partial or empty dataset in place of one.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to read '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("bad data format: {0}")]
    Format(String),
}

impl PipelineError {
    pub fn load(path: &str, source: std::io::Error) -> Self {
        PipelineError::Load {
            path: path.to_string(),
            source,
        }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        PipelineError::Format(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
