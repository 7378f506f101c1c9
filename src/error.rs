//! Error types for loading and validating scenes

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur when loading or validating a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
        span: Option<Span>,
    },
}

impl SceneError {
    /// Create an invalid value error
    pub fn invalid(field: &'static str, reason: impl Into<String>, span: Option<Span>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
            span,
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Parse(e) => e.span(),
            Self::Invalid { span, .. } => span.clone(),
            Self::Io(_) => None,
        }
    }

    /// Short message without the source location
    fn message(&self) -> String {
        match self {
            Self::Parse(e) => e.message().to_string(),
            other => other.to_string(),
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// Errors without a span fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };

        let message = self.message();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display() {
        let err = SceneError::invalid("image width", "must be greater than 0", Some(4..6));
        assert_eq!(err.to_string(), "invalid image width: must be greater than 0");
        assert_eq!(err.span(), Some(4..6));
    }

    #[test]
    fn test_format_without_span_is_plain() {
        let err = SceneError::invalid("angle", "must be finite", None);
        assert_eq!(err.format("", "scene.toml"), "invalid angle: must be finite");
    }

    #[test]
    fn test_format_with_span_mentions_file() {
        let source = "angle = nan\n";
        let err = SceneError::invalid("angle", "must be finite", Some(8..11));
        let report = err.format(source, "scene.toml");
        assert!(report.contains("scene.toml"));
        assert!(report.contains("must be finite"));
    }
}
