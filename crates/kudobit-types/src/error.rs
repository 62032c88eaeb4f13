/// Input-validation failure raised before any computation proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Zero purchase amount or resale price, or an amount that overflows the ledger.
    InvalidAmount(String),
    /// Non-increasing tier thresholds, or fee percentages summing above 100%.
    InvalidConfiguration(String),
}

impl CoreError {
    /// Stable machine-readable kind for off-chain callers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "InvalidAmount",
            Self::InvalidConfiguration(_) => "InvalidConfiguration",
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount(msg) => write!(f, "invalid amount: {msg}"),
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}
