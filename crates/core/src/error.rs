//! Error types for thingdb concepts
//!
//! Every fallible operation in the workspace returns [`ConceptResult`].
//! The taxonomy is deliberately small:
//! - MalformedResponse: the wire payload violates the expected shape
//! - TransactionClosed / Transaction: failures surfaced by the transaction
//! - Config: decode configuration could not be loaded

use thiserror::Error;

/// Result alias used across thingdb crates
pub type ConceptResult<T> = Result<T, ConceptError>;

/// Errors raised while decoding concepts or querying through a transaction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConceptError {
    /// Wire payload violates the expected shape (wrong or missing value
    /// branch, unusable type reference, missing response case)
    #[error("malformed response: {reason}")]
    MalformedResponse {
        /// What was wrong with the payload
        reason: String,
    },

    /// The transaction a remote concept is bound to has been closed
    #[error("the transaction has been closed and no further operation is allowed")]
    TransactionClosed,

    /// Transport or transaction-state failure reported by the transaction
    #[error("transaction error: {message}")]
    Transaction {
        /// Message from the transaction collaborator
        message: String,
    },

    /// Decode configuration could not be read or parsed
    #[error("invalid configuration: {message}")]
    Config {
        /// Underlying reader or parser message
        message: String,
    },
}

impl ConceptError {
    /// Create a MalformedResponse error
    pub fn malformed(reason: impl Into<String>) -> Self {
        ConceptError::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Create a Transaction error
    pub fn transaction(message: impl Into<String>) -> Self {
        ConceptError::Transaction {
            message: message.into(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        ConceptError::Config {
            message: message.into(),
        }
    }

    /// True for protocol-shape violations
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, ConceptError::MalformedResponse { .. })
    }

    /// True for failures that originate in the transaction collaborator
    pub fn is_transaction_error(&self) -> bool {
        matches!(
            self,
            ConceptError::TransactionClosed | ConceptError::Transaction { .. }
        )
    }
}
