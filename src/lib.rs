//! # rpn-tree
//!
//! rpn-tree turns postfix (Reverse Polish Notation) arithmetic into a binary
//! expression tree. A built tree can be printed in in-order, preorder or
//! post-order, evaluated to a single `f64`, or traced node by node as one
//! JSON-style record per line.
//!
//! ```
//! use rpn_tree::tree::{Traversal, Tree};
//!
//! let tree = Tree::from_postfix("5 1 2 + 4 * + 3 -").unwrap();
//! assert_eq!(tree.traverse(Traversal::InOrder), "5 + 1 + 2 * 4 - 3");
//! assert_eq!(tree.evaluate(), 14.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the nodes of an expression tree.
///
/// This module declares the operator and symbol types produced by the lexer
/// and the [`ast::Node`] type the tree is made of. Each node keeps its token
/// text for printing and its classified symbol for evaluation.
///
/// # Responsibilities
/// - Defines the five binary operators and their arithmetic.
/// - Classifies tokens once as operand or operator.
/// - Owns child subtrees and releases them without deep recursion.
pub mod ast;
/// Provides the error types for building and traversing trees.
///
/// Building reports structural problems with the postfix input; traversal
/// reports mode names it does not recognize. Numeric edge cases such as
/// division by zero are not errors.
pub mod error;
/// Builds, walks and evaluates expression trees.
///
/// This module ties together the tokenizer, the stack-based builder, the
/// traversals, evaluation and the step-by-step trace behind the [`tree::Tree`]
/// type.
///
/// # Responsibilities
/// - Tokenizes postfix input and reduces it to a single tree.
/// - Assigns preorder ids and parent ids.
/// - Projects the tree as text, as a number, or as per-node records.
pub mod tree;

pub use error::{BuildError, TraversalError};
pub use tree::{Traversal, Tree};

/// Builds a tree from `source` and evaluates it.
///
/// # Errors
/// Returns the [`BuildError`] if `source` is not a well-formed postfix
/// expression.
///
/// # Examples
/// ```
/// use rpn_tree::evaluate;
///
/// assert_eq!(evaluate("3 4 +"), Ok(7.0));
/// assert!(evaluate("3 4").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, BuildError> {
    Ok(Tree::from_postfix(source)?.evaluate())
}
