use crate::error::ManacherError;
use crate::transform::{transform_with, Sentinels};
use crate::Stepper;

/// Configures how an input is transformed before a pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepperBuilder {
    sentinels: Option<Sentinels>,
}

impl StepperBuilder {
    pub fn new() -> Self {
        Self { sentinels: None }
    }

    pub fn with_sentinels(mut self, sentinels: Sentinels) -> Self {
        self.sentinels = Some(sentinels);
        self
    }

    pub fn build(self, input: &str) -> Result<Stepper, ManacherError> {
        let sentinels = self.sentinels.unwrap_or_default();
        Ok(Stepper::new(transform_with(input, sentinels)?))
    }
}
