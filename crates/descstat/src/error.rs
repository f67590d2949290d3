/// Errors returned by the statistics functions.
///
/// Every function fails fast: there is no partial result and no default
/// value substituted for an invalid input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The operation reduces over its input but the input was empty.
    #[display("{operation}: input sequence is empty")]
    EmptyInput { operation: &'static str },
    /// A divisor (sum of values, reciprocal sum, or standard deviation) was zero.
    #[display("{operation}: division by zero")]
    DivisionByZero { operation: &'static str },
    /// A numeric parameter was outside the range the operation accepts.
    #[display("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

impl StatsError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    pub(crate) fn division_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }

    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { name, reason }
    }
}
