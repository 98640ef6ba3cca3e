/// Errors from fitness evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FitnessError {
    #[error(
        "length mismatch: environment={environment} output={output} environment_out={environment_out}"
    )]
    LengthMismatch {
        environment: usize,
        output: usize,
        environment_out: usize,
    },
}

pub type FitnessResult<T> = Result<T, FitnessError>;
