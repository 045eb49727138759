use crate::ast::Node;

/// The builder module turns a postfix expression into a tree.
///
/// Operands are pushed onto an explicit stack as leaves; each operator pops
/// its right and then its left operand and pushes the combined subtree. Once
/// the input is exhausted the single remaining subtree becomes the root and
/// every node receives its preorder id.
///
/// # Responsibilities
/// - Drives the tokenizer and reduces the operand stack.
/// - Reports structural failures (stack underflow, leftover operands).
/// - Assigns preorder ids and parent ids.
pub mod builder;
/// Numeric evaluation of a built tree.
///
/// Hosts the post-order fold shared by [`Tree::evaluate`] and the
/// step-by-step trace.
pub mod evaluator;
/// The lexer module tokenizes postfix source text.
///
/// Recognizes the five operators and decimal literals (with an optional
/// leading minus sign) and steps over anything else.
pub mod lexer;
/// Step-by-step evaluation records, one line per node.
pub mod trace;
/// In-order, preorder and post-order projections of a tree.
pub mod traversal;

pub use traversal::Traversal;

/// A binary expression tree built from a postfix expression.
///
/// A tree starts out empty. [`Tree::build`] replaces whatever it held before,
/// and dropping the tree frees every node.
///
/// # Example
/// ```
/// use rpn_tree::tree::{Traversal, Tree};
///
/// let tree = Tree::from_postfix("5 1 2 + 4 * + 3 -").unwrap();
/// assert_eq!(tree.evaluate(), 14.0);
/// assert_eq!(tree.traverse(Traversal::PreOrder), "- + 5 * + 1 2 4 3");
/// ```
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` if nothing has been built.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes(Traversal::PreOrder).len()
    }

    /// Releases the current structure, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Looks up a node by its preorder id.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::tree::Tree;
    ///
    /// let tree = Tree::from_postfix("3 4 +").unwrap();
    /// assert_eq!(tree.node(2).map(|n| n.value()), Some("4"));
    /// assert!(tree.node(3).is_none());
    /// ```
    #[must_use]
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes(Traversal::PreOrder).get(id).copied()
    }
}
