use std::io::{self, Write};

use crate::{
    ast::{Node, Symbol},
    tree::Tree,
};

/// Operator field written for operand leaves.
pub const OPERAND_MARKER: char = '#';

impl Tree {
    /// Writes one record per node, in post-order, describing its evaluated
    /// value.
    ///
    /// Flat records carry the node's preorder `id` and `parent` (`-1` for the
    /// root). With `use_level` set, each record is instead indented by one
    /// space per level of depth and the two id fields are left out.
    ///
    /// # Errors
    /// Propagates any write error from `out`.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::tree::Tree;
    ///
    /// let tree = Tree::from_postfix("3 4 +").unwrap();
    /// let mut out = Vec::new();
    /// tree.step_by_step_evaluation(&mut out, true).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(),
    ///            " {\"value\":3.00, \"operator\":\"#\", \"operand\":true}\n\
    ///             \x20{\"value\":4.00, \"operator\":\"#\", \"operand\":true}\n\
    ///             {\"value\":7.00, \"operator\":\"+\", \"operand\":false}\n");
    /// ```
    pub fn step_by_step_evaluation<W: Write>(&self, out: &mut W, use_level: bool) -> io::Result<()> {
        self.fold_postorder(|node, depth, value| write_record(out, node, depth, value, use_level))?;
        out.flush()
    }

    /// Collects [`Tree::step_by_step_evaluation`] output into a string.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::tree::Tree;
    ///
    /// let tree = Tree::from_postfix("3 4 +").unwrap();
    /// let trace = tree.step_by_step_string(false);
    ///
    /// assert_eq!(trace.lines().last(),
    ///            Some("{\"value\":7.00, \"operator\":\"+\", \"operand\":false, \"id\":0, \"parent\":-1}"));
    /// ```
    #[must_use]
    pub fn step_by_step_string(&self, use_level: bool) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        if self.step_by_step_evaluation(&mut out, use_level).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}

fn write_record<W: Write>(out: &mut W,
                          node: &Node,
                          depth: usize,
                          value: f64,
                          use_level: bool)
                          -> io::Result<()> {
    if use_level {
        write!(out, "{:depth$}", "")?;
    }

    let (operator, operand) = match node.symbol() {
        Symbol::Operand(_) => (OPERAND_MARKER, true),
        Symbol::Operator(op) => (op.as_char(), false),
    };
    write!(out, "{{\"value\":{value:.2}, \"operator\":\"{operator}\", \"operand\":{operand}")?;

    if !use_level {
        let parent = node.parent_id().and_then(|id| i64::try_from(id).ok()).unwrap_or(-1);
        write!(out, ", \"id\":{}, \"parent\":{parent}", node.id())?;
    }

    writeln!(out, "}}")
}
