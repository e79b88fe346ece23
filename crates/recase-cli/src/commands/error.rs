use recase_core::Style;

/// Failures surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown style '{name}'")]
    UnknownStyle {
        name: String,
        suggestion: Option<String>,
    },

    #[error("--fill and --keep-apostrophes are not supported by style '{0}'")]
    OptionsNotSupported(Style),

    #[error(transparent)]
    Convert(#[from] recase_core::Error),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Follow-up line printed after the error message.
    pub fn hint(&self) -> Option<String> {
        match self {
            CommandError::UnknownStyle {
                suggestion: Some(s),
                ..
            } => Some(format!(
                "Did you mean '{s}'? Run 'recase styles' for the full list."
            )),
            CommandError::UnknownStyle { .. } => {
                Some("Run 'recase styles' for the full list.".to_string())
            }
            CommandError::OptionsNotSupported(_) => {
                Some("Only lower, upper, and capital accept options.".to_string())
            }
            _ => None,
        }
    }
}
