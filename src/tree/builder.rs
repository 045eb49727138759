use std::str::FromStr;

use tracing::instrument;

use crate::{
    ast::{Node, Symbol},
    error::BuildError,
    tree::{Tree, lexer::Tokenizer},
};

impl Tree {
    /// Builds the tree from a postfix expression.
    ///
    /// Any previous structure is released first. On failure the tree is left
    /// empty and every partially built subtree is freed.
    ///
    /// # Errors
    /// - [`BuildError::OperatorUnderflow`] if an operator finds fewer than two
    ///   subtrees on the stack. Building stops at that operator.
    /// - [`BuildError::EmptyExpression`] if the input holds no tokens.
    /// - [`BuildError::DanglingOperands`] if more than one subtree remains.
    /// - [`BuildError::ReservedSentinel`] if the input contains `#`.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::{error::BuildError, tree::Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.build("3 4 +").is_ok());
    /// assert!(matches!(tree.build("3 +"), Err(BuildError::OperatorUnderflow { .. })));
    /// assert!(tree.is_empty());
    /// ```
    #[instrument(level = "debug", skip_all, fields(len = postfix.len()))]
    pub fn build(&mut self, postfix: &str) -> Result<(), BuildError> {
        self.clear();

        let root = reduce(postfix).inspect_err(|e| tracing::debug!(error = %e, "build failed"))?;
        self.root = Some(Box::new(root));
        self.assign_preorder_ids();

        tracing::debug!(nodes = self.len(), "built expression tree");
        Ok(())
    }

    /// Creates a tree from a postfix expression.
    ///
    /// # Errors
    /// Same as [`Tree::build`].
    pub fn from_postfix(postfix: &str) -> Result<Self, BuildError> {
        let mut tree = Self::new();
        tree.build(postfix)?;
        Ok(tree)
    }

    /// Numbers the nodes in preorder, root first, recording each parent's id.
    fn assign_preorder_ids(&mut self) {
        let Some(root) = self.root.as_deref_mut() else {
            return;
        };

        let mut next_id = 0;
        let mut pending: Vec<(&mut Node, Option<usize>)> = vec![(root, None)];

        while let Some((node, parent_id)) = pending.pop() {
            node.id = next_id;
            node.parent_id = parent_id;
            next_id += 1;

            let id = node.id;
            let (left, right) = node.children_mut();
            // Right first so that the left subtree is numbered before it.
            if let Some(right) = right {
                pending.push((right, Some(id)));
            }
            if let Some(left) = left {
                pending.push((left, Some(id)));
            }
        }
    }
}

impl FromStr for Tree {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_postfix(s)
    }
}

/// Runs the stack reduction over the whole input and returns the sole
/// remaining subtree.
fn reduce(postfix: &str) -> Result<Node, BuildError> {
    let mut stack: Vec<Node> = Vec::new();

    for lexeme in Tokenizer::new(postfix) {
        tracing::trace!(token = lexeme.text, depth = stack.len(), "read token");

        let symbol = lexeme.token
                           .symbol()
                           .ok_or(BuildError::ReservedSentinel { position: lexeme.span.start })?;

        match symbol {
            Symbol::Operand(value) => stack.push(Node::leaf(lexeme.text, value)),
            Symbol::Operator(op) => {
                let available = stack.len();
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(BuildError::OperatorUnderflow { operator: op,
                                                               position: lexeme.span.start,
                                                               available });
                };
                stack.push(Node::operator(op, left, right));
            },
        }
    }

    match stack.len() {
        0 => Err(BuildError::EmptyExpression),
        1 => stack.pop().ok_or(BuildError::EmptyExpression),
        remaining => Err(BuildError::DanglingOperands { remaining }),
    }
}
