use crate::{
    ast::{Node, Symbol},
    tree::Tree,
};

impl Tree {
    /// Evaluates the expression held by the tree.
    ///
    /// Division by zero follows IEEE-754 and produces an infinity or `NaN`.
    /// An empty tree evaluates to `0.0`.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::tree::Tree;
    ///
    /// assert_eq!(Tree::from_postfix("6 2 /").unwrap().evaluate(), 3.0);
    /// assert_eq!(Tree::from_postfix("2 3 ^").unwrap().evaluate(), 8.0);
    /// assert_eq!(Tree::new().evaluate(), 0.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        match self.fold_postorder(|_, _, _| Ok::<_, std::convert::Infallible>(())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Walks the tree in post-order, evaluating as it goes.
    ///
    /// `visit` receives each node with its depth (the root is at depth `0`)
    /// and its evaluated value, children strictly before their parent. The
    /// first error returned by `visit` stops the walk. On success the value
    /// of the whole expression is returned; an empty tree yields `0.0` without
    /// calling `visit`.
    ///
    /// # Errors
    /// Whatever `visit` returns.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::tree::Tree;
    ///
    /// let tree = Tree::from_postfix("1 2 + 3 *").unwrap();
    /// let mut seen = Vec::new();
    /// let total = tree.fold_postorder(|node, depth, value| {
    ///                     seen.push((node.value().to_owned(), depth, value));
    ///                     Ok::<_, ()>(())
    ///                 })
    ///                 .unwrap();
    ///
    /// assert_eq!(total, 9.0);
    /// assert_eq!(seen.last(), Some(&("*".to_owned(), 0, 9.0)));
    /// assert_eq!(seen[0], ("1".to_owned(), 2, 1.0));
    /// ```
    pub fn fold_postorder<E, F>(&self, mut visit: F) -> Result<f64, E>
        where F: FnMut(&Node, usize, f64) -> Result<(), E>
    {
        let Some(root) = self.root() else {
            return Ok(0.0);
        };

        // (node, depth, children already expanded)
        let mut pending: Vec<(&Node, usize, bool)> = vec![(root, 0, false)];
        let mut values: Vec<f64> = Vec::new();

        while let Some((node, depth, expanded)) = pending.pop() {
            if !expanded {
                pending.push((node, depth, true));
                pending.extend(node.right().map(|right| (right, depth + 1, false)));
                pending.extend(node.left().map(|left| (left, depth + 1, false)));
                continue;
            }

            let value = match node.symbol() {
                Symbol::Operand(value) => value,
                Symbol::Operator(op) => {
                    // Operator nodes always own both children, so both values
                    // are on the stack.
                    let right = values.pop().unwrap_or(0.0);
                    let left = values.pop().unwrap_or(0.0);
                    op.apply(left, right)
                },
            };

            visit(node, depth, value)?;
            values.push(value);
        }

        Ok(values.pop().unwrap_or(0.0))
    }
}
