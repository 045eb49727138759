use std::ops::Range;

use logos::Logos;

use crate::ast::{Operator, Symbol};

/// Represents a lexical token of a postfix expression.
///
/// Characters that match none of these patterns, parentheses included, are
/// not tokens; [`Tokenizer`] steps over them without complaint.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literals such as `4`, `2.5`, `.5`, `3.` or `-3`.
    ///
    /// A leading `-` only belongs to the literal when a digit follows it
    /// directly; `- 3` and `-.5` start with the subtraction operator.
    #[regex(r"-?[0-9]+(\.[0-9]*)?", parse_operand)]
    #[regex(r"\.[0-9]+", parse_operand)]
    Operand(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `#`, the operand marker used in step-by-step records.
    #[token("#")]
    Sentinel,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

impl Token {
    /// Classifies the token, or returns `None` for the reserved `#`.
    ///
    /// # Example
    /// ```
    /// use rpn_tree::{
    ///     ast::{Operator, Symbol},
    ///     tree::lexer::Token,
    /// };
    ///
    /// assert_eq!(Token::Minus.symbol(), Some(Symbol::Operator(Operator::Sub)));
    /// assert_eq!(Token::Operand(-3.0).symbol(), Some(Symbol::Operand(-3.0)));
    /// assert_eq!(Token::Sentinel.symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        let op = match self {
            Self::Operand(value) => return Some(Symbol::Operand(value)),
            Self::Plus => Operator::Add,
            Self::Minus => Operator::Sub,
            Self::Star => Operator::Mul,
            Self::Slash => Operator::Div,
            Self::Caret => Operator::Pow,
            Self::Sentinel | Self::Whitespace => return None,
        };
        Some(Symbol::Operator(op))
    }
}

/// Parses a numeric literal from the current token slice.
///
/// The regexes only admit decimal literals, so this fails only if the slice
/// is not representable, in which case the slice is skipped like any other
/// unrecognized input.
fn parse_operand(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// One token together with the text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    /// The source text of the token.
    pub text:  &'a str,
    /// The classified token.
    pub token: Token,
    /// Byte range of the token in the source.
    pub span:  Range<usize>,
}

/// A cursor over a postfix expression that yields one token at a time.
///
/// Unrecognized characters are skipped silently; the iterator ends when the
/// input is exhausted.
///
/// # Example
/// ```
/// use rpn_tree::tree::lexer::{Token, Tokenizer};
///
/// let mut tokens = Tokenizer::new("-3 4 -");
/// assert_eq!(tokens.next().map(|l| l.text), Some("-3"));
/// assert_eq!(tokens.position(), 2);
/// assert_eq!(tokens.next().map(|l| l.token), Some(Token::Operand(4.0)));
/// assert_eq!(tokens.next().map(|l| l.token), Some(Token::Minus));
/// assert!(tokens.next().is_none());
/// ```
pub struct Tokenizer<'a> {
    lexer: logos::Lexer<'a, Token>,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { lexer: Token::lexer(source) }
    }

    /// Byte offset just past the most recently returned token.
    #[must_use]
    pub fn position(&self) -> usize {
        self.lexer.span().end
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lexer.next()? {
                Ok(token) => {
                    return Some(Lexeme { text: self.lexer.slice(),
                                         token,
                                         span: self.lexer.span() });
                },
                Err(()) => {
                    tracing::trace!(skipped = self.lexer.slice(),
                                    offset = self.lexer.span().start,
                                    "ignoring unrecognized input");
                },
            }
        }
    }
}

/// Splits a postfix expression into its token texts.
///
/// # Example
/// ```
/// use rpn_tree::tree::lexer::tokenize;
///
/// assert_eq!(tokenize("-3 4 +"), vec!["-3", "4", "+"]);
/// assert_eq!(tokenize("3 4 -"), vec!["3", "4", "-"]);
/// assert_eq!(tokenize("(1 2 +)"), vec!["1", "2", "+"]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<String> {
    Tokenizer::new(source).map(|lexeme| lexeme.text.to_owned()).collect()
}
