use std::{fmt, str::FromStr};

use crate::{ast::Node, error::TraversalError, tree::Tree};

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, node, right subtree.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl FromStr for Traversal {
    type Err = TraversalError;

    /// Parses a traversal name, ignoring case.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::tree::Traversal;
    ///
    /// assert_eq!("pre-order".parse(), Ok(Traversal::PreOrder));
    /// assert_eq!("INORDER".parse(), Ok(Traversal::InOrder));
    /// assert!("level".parse::<Traversal>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inorder" | "in-order" | "in" => Ok(Self::InOrder),
            "preorder" | "pre-order" | "pre" => Ok(Self::PreOrder),
            "postorder" | "post-order" | "post" => Ok(Self::PostOrder),
            _ => Err(TraversalError::Unknown { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::InOrder => "inorder",
                        Self::PreOrder => "preorder",
                        Self::PostOrder => "postorder",
                    })
    }
}

/// Work item for the iterative walks: a subtree still to be expanded, or a
/// node whose turn to be emitted has come.
enum Step<'a> {
    Expand(&'a Node),
    Emit(&'a Node),
}

impl Tree {
    /// Renders the token values in the given order, separated by single
    /// spaces. An empty tree renders as an empty string.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::tree::{Traversal, Tree};
    ///
    /// let tree = Tree::from_postfix("3 4 +").unwrap();
    /// assert_eq!(tree.traverse(Traversal::InOrder), "3 + 4");
    /// assert_eq!(tree.traverse(Traversal::PreOrder), "+ 3 4");
    /// assert_eq!(tree.traverse(Traversal::PostOrder), "3 4 +");
    /// assert_eq!(Tree::new().traverse(Traversal::InOrder), "");
    /// ```
    #[must_use]
    pub fn traverse(&self, order: Traversal) -> String {
        self.nodes(order).iter().map(|node| node.value()).collect::<Vec<_>>().join(" ")
    }

    /// Same as [`Tree::traverse`] with the order given by name.
    ///
    /// An unknown name is logged as an error and yields an empty string.
    #[must_use]
    pub fn traverse_named(&self, order: &str) -> String {
        match order.parse() {
            Ok(order) => self.traverse(order),
            Err(e) => {
                tracing::error!(error = %e, "invalid traversal type");
                String::new()
            },
        }
    }

    /// Collects references to every node in the given order.
    ///
    /// The walk keeps its own stack, so tree depth is bounded by memory
    /// rather than by the call stack.
    #[must_use]
    pub fn nodes(&self, order: Traversal) -> Vec<&Node> {
        let mut visited = Vec::new();
        let mut pending: Vec<Step<'_>> = self.root().map(Step::Expand).into_iter().collect();

        while let Some(step) = pending.pop() {
            let node = match step {
                Step::Emit(node) => {
                    visited.push(node);
                    continue;
                },
                Step::Expand(node) => node,
            };

            // Pushed in reverse of the desired visiting order.
            let right = node.right().map(Step::Expand);
            let left = node.left().map(Step::Expand);
            match order {
                Traversal::InOrder => {
                    pending.extend(right);
                    pending.push(Step::Emit(node));
                    pending.extend(left);
                },
                Traversal::PreOrder => {
                    pending.extend(right);
                    pending.extend(left);
                    pending.push(Step::Emit(node));
                },
                Traversal::PostOrder => {
                    pending.push(Step::Emit(node));
                    pending.extend(right);
                    pending.extend(left);
                },
            }
        }

        visited
    }
}
