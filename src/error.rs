/// Tree construction errors.
///
/// Raised when a postfix expression does not reduce to exactly one tree:
/// an operator without two operands to consume, an input with no operands at
/// all, or operands left over once the input is exhausted.
pub mod build_error;
/// Traversal mode errors.
///
/// Raised when a traversal order is named by a string that does not match any
/// known mode.
pub mod traversal_error;

pub use build_error::BuildError;
pub use traversal_error::TraversalError;
