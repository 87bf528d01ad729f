//! Error handling and result types for OrderedMultiwayTree operations.
//!
//! Only two conditions are ever reported as errors: a rejected construction
//! parameter and a failed structural audit. An absent key is a normal query
//! outcome and is represented as `None`, never as an error.

/// Error type for multiway tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MultiwayTreeError {
    /// The requested order cannot back a valid tree.
    InvalidConfiguration(String),
    /// A structural audit found the tree in an inconsistent state.
    InvariantViolation(String),
}

impl MultiwayTreeError {
    /// Create an InvalidConfiguration error for a rejected order.
    pub fn invalid_order(order: usize, min_order: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "Order {} is invalid (must be an even number of at least {})",
            order, min_order
        ))
    }

    /// Create an InvariantViolation error with context.
    pub fn invariant_violation(context: &str, details: &str) -> Self {
        Self::InvariantViolation(format!("{}: {}", context, details))
    }

    /// Check if this error rejected a construction parameter.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Check if this error came from a structural audit.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

impl std::fmt::Display for MultiwayTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultiwayTreeError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            MultiwayTreeError::InvariantViolation(msg) => {
                write!(f, "Invariant violation: {}", msg)
            }
        }
    }
}

impl std::error::Error for MultiwayTreeError {}

/// Result type for tree operations that may fail a structural audit.
pub type TreeResult<T> = Result<T, MultiwayTreeError>;

/// Result type for tree construction.
pub type InitResult<T> = Result<T, MultiwayTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_order_formats_context() {
        let err = MultiwayTreeError::invalid_order(3, 4);
        assert!(err.is_configuration_error());
        assert!(!err.is_invariant_violation());
        assert!(err.to_string().contains("Order 3"));
    }

    #[test]
    fn invariant_violation_formats_context() {
        let err = MultiwayTreeError::invariant_violation("root", "two children required");
        assert!(err.is_invariant_violation());
        assert_eq!(
            err.to_string(),
            "Invariant violation: root: two children required"
        );
    }
}
