//! Error types.
//!
//! - `FieldError`: a rejected input line. Recovered by the prompter, its
//!   `Display` text is the corrective message shown to the user.
//! - `SessionError`: unrecoverable failures that end the session.

use thiserror::Error;

/// Why a raw input line was rejected for a card field.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FieldError {
    /// Empty line. Numeric and region fields retry silently on this.
    #[error("entrada vazia")]
    Blank,

    #[error("Valor inválido. Digite um inteiro entre {min} e {max}.")]
    InvalidInt { min: i64, max: i64 },

    #[error("Valor inválido. Digite um número entre {min:.3} e {max:.2}.")]
    InvalidDecimal { min: f64, max: f64 },

    #[error("Inválido. Digite uma letra entre A e H.")]
    InvalidRegion,

    #[error("Inválido. Use formato Letra(A..H)+Dois dígitos. Ex.: C02")]
    InvalidCode,

    #[error("Digite pelo menos {min} caracteres.")]
    NameTooShort { min: usize },

    #[error("Digite no máximo {max} caracteres.")]
    NameTooLong { max: usize },
}

impl FieldError {
    /// Whether the prompter should re-prompt without printing a message.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, FieldError::Blank)
    }
}

/// Failures that terminate the interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input ended while a field was still being read.
    #[error("input closed while reading {field}")]
    InputClosed { field: &'static str },

    /// Display or comparison was requested before both cards were collected.
    #[error("both cards must be collected before {stage}")]
    CardsMissing { stage: &'static str },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        let err = FieldError::InvalidInt { min: 1, max: 5 };
        assert_eq!(err.to_string(), "Valor inválido. Digite um inteiro entre 1 e 5.");

        let err = FieldError::InvalidDecimal { min: 0.01, max: 30_000_000.0 };
        assert_eq!(
            err.to_string(),
            "Valor inválido. Digite um número entre 0.010 e 30000000.00."
        );

        let err = FieldError::InvalidDecimal { min: 0.001, max: 1_000_000.0 };
        assert_eq!(
            err.to_string(),
            "Valor inválido. Digite um número entre 0.001 e 1000000.00."
        );

        assert_eq!(
            FieldError::NameTooShort { min: 2 }.to_string(),
            "Digite pelo menos 2 caracteres."
        );
    }

    #[test]
    fn test_only_blank_is_silent() {
        assert!(FieldError::Blank.is_silent());
        assert!(!FieldError::InvalidRegion.is_silent());
        assert!(!FieldError::InvalidCode.is_silent());
    }

    #[test]
    fn test_session_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: SessionError = io.into();
        assert!(matches!(err, SessionError::Io(_)));
        assert!(err.to_string().starts_with("console I/O failed"));
    }
}
