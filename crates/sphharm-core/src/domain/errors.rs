use crate::common::config::RenderConfigError;
use crate::surface::SurfaceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl ErrorCategory {
    pub const fn exit_mapping(self) -> ExitCodeMapping {
        match self {
            Self::Success => ExitCodeMapping {
                exit_code: 0,
                name: "Success",
            },
            Self::InputValidationError => ExitCodeMapping {
                exit_code: 2,
                name: "InputValidationError",
            },
            Self::IoSystemError => ExitCodeMapping {
                exit_code: 3,
                name: "IoSystemError",
            },
            Self::ComputationError => ExitCodeMapping {
                exit_code: 4,
                name: "ComputationError",
            },
            Self::InternalError => ExitCodeMapping {
                exit_code: 5,
                name: "InternalError",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_mapping().exit_code
    }

    pub const fn name(self) -> &'static str {
        self.exit_mapping().name
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodeMapping {
    pub exit_code: i32,
    pub name: &'static str,
}

/// Error surfaced to the user, tagged with a category and a stable diagnostic code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SphError {
    category: ErrorCategory,
    code: &'static str,
    message: String,
}

impl SphError {
    pub fn new(category: ErrorCategory, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub fn input_validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::InputValidationError, code, message)
    }

    pub fn io_system(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::IoSystemError, code, message)
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::InternalError, code, message)
    }

    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.code, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for SphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.name(),
            self.code,
            self.message
        )
    }
}

impl Error for SphError {}

impl From<SurfaceError> for SphError {
    fn from(error: SurfaceError) -> Self {
        let code = match error {
            SurfaceError::InvalidQuantumNumbers { .. } => "INPUT.QUANTUM_NUMBERS",
            SurfaceError::InvalidResolution { .. } => "INPUT.RESOLUTION",
        };
        Self::input_validation(code, error.to_string())
    }
}

impl From<RenderConfigError> for SphError {
    fn from(error: RenderConfigError) -> Self {
        match error {
            RenderConfigError::Read { .. } => Self::io_system("IO.CONFIG_READ", error.to_string()),
            RenderConfigError::Parse { .. } => {
                Self::input_validation("INPUT.CONFIG_PARSE", error.to_string())
            }
        }
    }
}
