/// Errors from building a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("network needs at least one layer width")]
    NoLayers,
    #[error("edge source index {index} out of range for left layer of size {left_size}")]
    SourceOutOfRange { index: usize, left_size: usize },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
