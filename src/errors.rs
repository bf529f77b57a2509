use thiserror::Error;

/// Unified error type for all pricing and catalog operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No valid material entries were left after filtering. Recoverable:
    /// the host should prompt for more input and not proceed to pricing.
    #[error("No valid material entries to aggregate")]
    InsufficientInput,

    /// Base cost was zero or negative, which cannot be priced. Recoverable:
    /// the host should reject the cost configuration.
    #[error("Cannot price a product with base cost {base_cost}")]
    InvalidCost {
        /// The offending base cost
        base_cost: f64,
    },

    /// A product lookup by name or id found nothing active
    #[error("Product not found: {name}")]
    ProductNotFound {
        /// The name or id used in the lookup
        name: String,
    },

    /// A currency code is not in the static currency table
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The unrecognized currency code
        code: String,
    },

    /// Configuration loading or validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Database operation failure from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON encoding/decoding failure for the stored material list
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
