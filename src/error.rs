use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The year cannot be represented by `NaiveDate`, or lies before year 1.
    #[error("invalid year {0}")]
    InvalidYear(i32),
    #[error("invalid holiday rule: {0}")]
    InvalidRule(String),
}
