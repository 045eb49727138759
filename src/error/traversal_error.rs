use thiserror::Error;

/// Raised when parsing a traversal mode from its name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// The name does not match `inorder`, `preorder` or `postorder`.
    #[error("unknown traversal '{name}', expected one of: inorder, preorder, postorder")]
    Unknown {
        /// The name that was given.
        name: String,
    },
}
