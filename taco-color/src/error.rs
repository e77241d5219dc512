use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("{component} out of range: {value} (expected {range})")]
    OutOfRange {
        component: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
