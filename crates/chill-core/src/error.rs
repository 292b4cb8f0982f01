use thiserror::Error;

pub type ChillResult<T> = Result<T, ChillError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChillError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
