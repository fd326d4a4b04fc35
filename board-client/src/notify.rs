use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        };
        write!(f, "{label}")
    }
}

/// Transient-message display seam. Fire and forget; implementations must
/// not block or fail.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, title: &str, message: &str);
}

/// Routes notifications through tracing, standing in for the toast layer.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        match severity {
            Severity::Error => tracing::error!("[notify] {title}: {message}"),
            Severity::Warning => tracing::warn!("[notify] {title}: {message}"),
            Severity::Success | Severity::Info => {
                tracing::info!("[notify {severity}] {title}: {message}")
            }
        }
    }
}
