//! Compact S-expression notation for trees.
//!
//! A leaf is written as its label, an inner node as `(label child ...)`:
//!
//! ```
//! use pov::domain::notation::parse;
//!
//! let tree = parse("(one (two three) (four (five six) seven))").unwrap();
//! assert_eq!(tree.value(), "one");
//! assert_eq!(tree.to_string(), "(one (two three) (four (five six) seven))");
//! ```

use std::fmt;
use std::str::CharIndices;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::Tree;
use crate::domain::error::DomainError;

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, self.root_index(), f)
    }
}

enum Frame {
    Enter(Index),
    Close,
}

fn write_node(tree: &Tree, idx: Index, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut stack = vec![Frame::Enter(idx)];
    let mut first = true;

    while let Some(frame) = stack.pop() {
        let idx = match frame {
            Frame::Close => {
                write!(f, ")")?;
                continue;
            }
            Frame::Enter(idx) => idx,
        };
        let Some(node) = tree.get_node(idx) else {
            continue;
        };
        if !first {
            write!(f, " ")?;
        }
        first = false;

        if node.children.is_empty() {
            write!(f, "{}", node.label)?;
        } else {
            write!(f, "({}", node.label)?;
            stack.push(Frame::Close);
            // Reverse so the first child is written first
            for &child in node.children.iter().rev() {
                stack.push(Frame::Enter(child));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Label(&'a str),
}

struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Next token with its byte offset, None at end of input.
    fn next_token(&mut self) -> Option<(usize, Token<'a>)> {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        let (start, c) = self.chars.next()?;
        let token = match c {
            '(' => Token::Open,
            ')' => Token::Close,
            _ => {
                let mut end = start + c.len_utf8();
                while let Some((pos, c)) = self
                    .chars
                    .next_if(|(_, c)| !c.is_whitespace() && *c != '(' && *c != ')')
                {
                    end = pos + c.len_utf8();
                }
                Token::Label(&self.input[start..end])
            }
        };
        Some((start, token))
    }
}

/// Parses a tree from S-expression notation.
///
/// Grammar: `node := label | "(" label node* ")"`. Labels are runs of
/// characters other than whitespace and parentheses.
#[instrument(level = "debug")]
pub fn parse(input: &str) -> Result<Tree, DomainError> {
    let mut lexer = Lexer::new(input);
    let mut tree: Option<Tree> = None;
    let mut open: Vec<Index> = Vec::new();

    while let Some((offset, token)) = lexer.next_token() {
        if tree.is_some() && open.is_empty() {
            return Err(DomainError::parse(offset, "trailing input after tree"));
        }
        match token {
            Token::Open => {
                let label = match lexer.next_token() {
                    Some((_, Token::Label(label))) => label,
                    Some((offset, _)) => {
                        return Err(DomainError::parse(offset, "expected label after '('"))
                    }
                    None => {
                        return Err(DomainError::parse(input.len(), "expected label after '('"))
                    }
                };
                let idx = attach(&mut tree, label, open.last().copied());
                open.push(idx);
            }
            Token::Close => {
                if open.pop().is_none() {
                    return Err(DomainError::parse(offset, "unexpected ')'"));
                }
            }
            Token::Label(label) => {
                attach(&mut tree, label, open.last().copied());
            }
        }
    }

    if !open.is_empty() {
        return Err(DomainError::parse(input.len(), "missing ')'"));
    }
    tree.ok_or_else(|| DomainError::parse(0, "empty tree notation"))
}

fn attach(tree: &mut Option<Tree>, label: &str, parent: Option<Index>) -> Index {
    match (tree.as_mut(), parent) {
        (Some(tree), Some(parent)) => tree.insert_node(label.to_string(), parent),
        (Some(tree), None) => tree.root_index(),
        (None, _) => {
            let leaf = Tree::leaf(label);
            let root = leaf.root_index();
            *tree = Some(leaf);
            root
        }
    }
}
