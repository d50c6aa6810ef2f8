use thiserror::Error;

/// Errors raised when untyped input crosses into the dashboard domain.
///
/// Every operation on already-typed values is total; these only appear when
/// parsing text from a config file, the command line, or a caller that holds
/// raw strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Not one of `success`, `warning`, `error`, `info`.
    #[error("Invalid notification kind: {0:?}")]
    InvalidNotificationKind(String),

    /// Not one of `light`, `dark`, `pro`.
    #[error("Invalid theme: {0:?}")]
    InvalidTheme(String),

    /// Not one of `en`, `es`, `zh`, `ar`.
    #[error("Invalid language: {0:?}")]
    InvalidLanguage(String),

    /// Empty (or whitespace-only) symbol.
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),
}

/// A specialized Result type for dashboard domain operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
