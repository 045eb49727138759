use thiserror::Error;

use crate::ast::Operator;

/// Represents every way a postfix expression can fail to become a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An operator was reached with fewer than two operands on the stack.
    #[error("operator '{operator}' at offset {position} needs two operands but only {available} available")]
    OperatorUnderflow {
        /// The operator that could not be applied.
        operator:  Operator,
        /// Byte offset of the operator in the input.
        position:  usize,
        /// How many subtrees were on the stack.
        available: usize,
    },
    /// The input contained no operands or operators.
    #[error("expression is empty")]
    EmptyExpression,
    /// More than one disconnected subexpression remained at the end of input.
    #[error("expression leaves {remaining} disconnected subexpressions, expected exactly one")]
    DanglingOperands {
        /// Number of subtrees left on the stack.
        remaining: usize,
    },
    /// The reserved operand marker `#` appeared in the input.
    #[error("'#' at offset {position} is reserved and cannot appear in an expression")]
    ReservedSentinel {
        /// Byte offset of the marker in the input.
        position: usize,
    },
}
