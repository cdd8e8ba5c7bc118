use thiserror::Error;

/// The two ways a stepper can refuse to produce a value.
///
/// `Stop` is the expected end of every stepper and not a failure; `Config` means the stepper
/// was built with a stride or chunk size that can never make progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StepperError {
    #[error("iteration offset must be positive")]
    Config,
    #[error("stop iteration")]
    Stop,
}

impl StepperError {
    pub fn is_stop(&self) -> bool {
        matches!(self, StepperError::Stop)
    }
    pub fn is_config(&self) -> bool {
        matches!(self, StepperError::Config)
    }
}

pub type StepperResult<T> = Result<T, StepperError>;

/// Rejects strides and chunk sizes that are not strictly positive.
pub fn ensure_positive<N: PartialOrd + Default>(offset: N) -> StepperResult<N> {
    if offset > N::default() {
        Ok(offset)
    } else {
        Err(StepperError::Config)
    }
}
