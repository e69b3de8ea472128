//! Pass configuration.

/// When to run the post-pass invariant check.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ValidateMode {
    Off,
    /// Only in builds with debug assertions.
    #[default]
    DebugOnly,
    Always,
}

impl ValidateMode {
    pub fn enabled(self) -> bool {
        match self {
            ValidateMode::Off => false,
            ValidateMode::DebugOnly => cfg!(debug_assertions),
            ValidateMode::Always => true,
        }
    }
}

/// Options for [`canonicalize`](crate::canonicalize).
#[derive(Clone, Debug)]
pub struct CanonOptions {
    /// Run index completion after anonymous-type resolution.
    pub complete_index_types: bool,
    pub validate: ValidateMode,
}

impl Default for CanonOptions {
    fn default() -> Self {
        CanonOptions {
            complete_index_types: true,
            validate: ValidateMode::default(),
        }
    }
}

impl CanonOptions {
    #[must_use]
    pub fn with_index_completion(mut self, enabled: bool) -> Self {
        self.complete_index_types = enabled;
        self
    }

    #[must_use]
    pub fn with_validation(mut self, mode: ValidateMode) -> Self {
        self.validate = mode;
        self
    }
}
