use crate::{
    ast::{Node, Operation},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Finds the attachment point for the next operand or operator.
///
/// Starting from an unlocked operation, the search follows `right` children
/// for as long as they are themselves unlocked operations, and stops at the
/// first operation whose right side is vacant or holds a locked node. This
/// right-spine walk is what encodes precedence without a precedence table:
/// everything completed (and therefore locked) is treated as a single
/// opaque operand.
///
/// # Parameters
/// - `node`: The root to search from. Must be an unlocked operation.
///
/// # Returns
/// A mutable reference to the operation owning the attachment point.
///
/// # Errors
/// [`ParseError::Internal`] when called on a locked or terminal node. The
/// parser never hands such a node back into the search; reaching this is a
/// bug, not an input error.
pub(in crate::interpreter::parser) fn open_operation(node: &mut Node)
                                                     -> ParseResult<&mut Operation> {
    if node.is_locked() {
        return Err(ParseError::internal("right-spine search entered a locked node"));
    }
    let Node::BinaryOp(operation) = node else {
        return Err(ParseError::internal("right-spine search entered a terminal node"));
    };

    let descend = matches!(operation.right.as_deref(),
                           Some(Node::BinaryOp(inner)) if !inner.is_locked());
    if !descend {
        return Ok(operation);
    }

    match operation.right.as_deref_mut() {
        Some(right) => open_operation(right),
        None => Err(ParseError::internal("right child vanished during spine search")),
    }
}

/// Attaches a node at the open right slot of the right spine.
///
/// Literals, parenthesized groups, and macro calls all attach through this
/// helper.
///
/// # Errors
/// - [`ParseError::UnexpectedLiteral`] if the slot is already occupied.
/// - [`ParseError::Internal`] if `root` is not an unlocked operation.
pub(in crate::interpreter::parser) fn attach_right(root: &mut Node, node: Node) -> ParseResult<()> {
    let target = open_operation(root)?;
    if target.right.is_some() {
        return Err(ParseError::UnexpectedLiteral);
    }
    target.right = Some(Box::new(node));
    Ok(())
}

/// Reports whether the right spine ends in a vacant slot.
///
/// Used after a slice has been fully consumed: a vacant slot at that point
/// means the expression ends in an operator.
pub(in crate::interpreter::parser) fn dangling_right(operation: &Operation) -> bool {
    match operation.right.as_deref() {
        None => true,
        Some(Node::BinaryOp(inner)) if !inner.is_locked() => dangling_right(inner),
        Some(_) => false,
    }
}

/// Finds the index of the delimiter matching the one at `open`.
///
/// Depth counting is local to the delimiter kind: a parenthesis search only
/// counts parentheses, a brace search only braces. Nested groups of the same
/// kind are skipped over as a whole.
///
/// # Parameters
/// - `tokens`: The slice to search in.
/// - `open`: Index of the opening parenthesis or brace.
///
/// # Returns
/// The index of the matching closing token.
///
/// # Errors
/// - [`ParseError::UnmatchedParenthesis`] / [`ParseError::UnmatchedBrace`]
///   (with the opener's 1-based token position) if the slice ends first.
/// - [`ParseError::Internal`] if `open` does not point at an opening
///   delimiter.
pub(in crate::interpreter::parser) fn matching_delimiter(tokens: &[Token],
                                                         open: usize)
                                                         -> ParseResult<usize> {
    let (opening, closing) = match tokens.get(open) {
        Some(Token::LParen) => (Token::LParen, Token::RParen),
        Some(Token::LBrace) => (Token::LBrace, Token::RBrace),
        _ => return Err(ParseError::internal("delimiter search started on a non-delimiter")),
    };

    let mut depth = 1_usize;
    for (index, token) in tokens.iter().enumerate().skip(open + 1) {
        if *token == opening {
            depth += 1;
        } else if *token == closing {
            depth -= 1;
            if depth == 0 {
                return Ok(index);
            }
        }
    }

    Err(match opening {
            Token::LParen => ParseError::UnmatchedParenthesis { position: open + 1 },
            _ => ParseError::UnmatchedBrace { position: open + 1 },
        })
}
