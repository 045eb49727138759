use std::fmt;

/// A binary arithmetic operator.
///
/// Postfix input has no unary operators, so every operator consumes exactly
/// two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the operator for a single-character symbol, if there is one.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::ast::Operator;
    ///
    /// assert_eq!(Operator::from_char('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_char('#'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Plain IEEE-754 semantics: dividing by zero yields an infinity or `NaN`
    /// rather than an error.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::ast::Operator;
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 3.0), 8.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The classification of a token, computed once by the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    /// A numeric literal such as `4`, `-3` or `2.5`.
    Operand(f64),
    /// One of the five binary operators.
    Operator(Operator),
}

impl Symbol {
    /// Whether this symbol is an operand.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }
}

/// A node of the expression tree.
///
/// Leaves hold operands and interior nodes hold operators. Every operator node
/// owns exactly two children; [`Node::operator`] is the only way to build one.
/// `id` and `parent_id` are filled in by a preorder walk once the whole tree
/// has been built.
#[derive(Debug, PartialEq)]
pub struct Node {
    value:     String,
    symbol:    Symbol,
    left:      Option<Box<Self>>,
    right:     Option<Box<Self>>,
    pub(crate) id:        usize,
    pub(crate) parent_id: Option<usize>,
}

impl Node {
    /// Creates a leaf holding an operand, keeping the token text as written.
    #[must_use]
    pub fn leaf(text: impl Into<String>, value: f64) -> Self {
        Self { value:     text.into(),
               symbol:    Symbol::Operand(value),
               left:      None,
               right:     None,
               id:        0,
               parent_id: None, }
    }

    /// Creates an operator node that takes ownership of both operands.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::ast::{Node, Operator};
    ///
    /// let node = Node::operator(Operator::Add, Node::leaf("3", 3.0), Node::leaf("4", 4.0));
    /// assert_eq!(node.value(), "+");
    /// assert!(!node.is_leaf());
    /// ```
    #[must_use]
    pub fn operator(op: Operator, left: Self, right: Self) -> Self {
        Self { value:     op.to_string(),
               symbol:    Symbol::Operator(op),
               left:      Some(Box::new(left)),
               right:     Some(Box::new(right)),
               id:        0,
               parent_id: None, }
    }

    /// The token text, exactly as it appeared in the input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn children_mut(&mut self) -> (Option<&mut Self>, Option<&mut Self>) {
        (self.left.as_deref_mut(), self.right.as_deref_mut())
    }

    /// A node with no children. Leaves always hold operands.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node's position in a preorder walk of its tree. The root is `0`.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// The preorder id of the parent, or `None` for the root.
    #[must_use]
    pub const fn parent_id(&self) -> Option<usize> {
        self.parent_id
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach the subtree onto a work list so that dropping a long chain
        // never recurses deeper than one level.
        let mut pending: Vec<Box<Self>> = self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
