use crate::{
    ast::{BinaryOperator, Node, Operation},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            macro_call::parse_macro_call,
            utils::{attach_right, dangling_right, matching_delimiter, open_operation},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token slice into a single-rooted syntax tree.
///
/// This is the entry point for parsing. It is called once for the whole
/// input and recursively for every parenthesized group and every macro
/// argument. The tree is built by chaining operations together in a single
/// left-to-right pass; precedence is encoded by where a new operation is
/// linked in (see [`parse_operator`]) rather than by a precedence table.
///
/// Every tree returned from `parse` is locked, because it is considered done
/// and must not be modified again.
///
/// An empty slice parses to the literal `0`. This resolves empty
/// parentheses, empty macro arguments, and empty top-level input alike.
///
/// # Parameters
/// - `tokens`: The token slice to parse.
///
/// # Returns
/// The root node of the parsed tree.
///
/// # Errors
/// Returns a `ParseError` describing the first structural problem found.
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let mut root: Option<Node> = None;
    let mut index = 0;

    while index < tokens.len() {
        match &tokens[index] {
            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                root = Some(parse_operator(root, tokens, index)?);
            },
            Token::Number(value) => {
                root = Some(parse_literal(root, tokens, index, *value)?);
            },
            Token::LParen => {
                let (node, close) = parse_group(root, tokens, index)?;
                root = Some(node);
                index = close;
            },
            Token::Identifier(identifier) => {
                let (node, close) = parse_macro_call(root, tokens, index, identifier)?;
                root = Some(node);
                index = close;
            },
            Token::RParen => {
                return Err(ParseError::UnmatchedParenthesis { position: index + 1 });
            },
            Token::RBrace => return Err(ParseError::UnexpectedClosingBrace),
            token @ (Token::LBrace | Token::Comma) => {
                return Err(ParseError::UnexpectedToken { token: token.to_string() });
            },
        }
        index += 1;
    }

    complete(root)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all non-operator tokens.
///
/// # Example
/// ```
/// use reckon::{ast::BinaryOperator, interpreter::{lexer::Token, parser::core::token_to_operator}};
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Handles an operator token.
///
/// Rejects an operator that directly follows another operator, then
/// dispatches on the precedence tier: `+` and `-` are handled by
/// [`parse_plus_minus`], `*` and `/` by [`parse_mul_div`].
fn parse_operator(root: Option<Node>, tokens: &[Token], index: usize) -> ParseResult<Node> {
    let Some(operator) = token_to_operator(&tokens[index]) else {
        return Err(ParseError::internal("operator handler called on a non-operator token"));
    };

    if index > 0 && let Some(previous) = token_to_operator(&tokens[index - 1]) {
        return Err(ParseError::ConsecutiveOperators { previous,
                                                      current: operator });
    }

    if operator.is_multiplicative() {
        parse_mul_div(root, operator)
    } else {
        Ok(parse_plus_minus(root, operator))
    }
}

/// Handles the operators `+` and `-`.
///
/// The tree is shifted to the left: a new operation replaces the root and
/// takes the old root as its left child, leaving the right side open for
/// whatever follows. Because the next `*` or `/` splices in *below* that
/// open right side, this single move is what makes the additive tier bind
/// more loosely than the multiplicative tier.
///
/// If this is the first token of the slice the left side stays empty and
/// evaluates to `0`, which permits a leading sign such as `-3+5`.
fn parse_plus_minus(root: Option<Node>, operator: BinaryOperator) -> Node {
    Node::BinaryOp(Operation::new(operator, root.map(Box::new), None))
}

/// Handles the operators `*` and `/`.
///
/// A locked root (a lone literal, macro call, or parenthesized group) is
/// taken as the left child of a new root operation. Otherwise the right
/// spine is searched for the attachment point:
///
/// - When the attachment point is itself multiplicative, the new operator
///   continues that chain, so the chain is shifted one level left in place.
///   This keeps chains such as `8/2/2` left associative.
/// - When the attachment point is additive, the new operation is spliced in
///   below it, taking only the last operand as its left child. The enclosing
///   addition keeps its place at the top of the tree, which is exactly the
///   precedence of `2+3*4`.
fn parse_mul_div(root: Option<Node>, operator: BinaryOperator) -> ParseResult<Node> {
    let Some(mut root) = root else {
        return Err(ParseError::LeadingMultiplicative { operator });
    };

    if root.is_locked() {
        return Ok(Node::BinaryOp(Operation::new(operator, Some(Box::new(root)), None)));
    }

    let target = open_operation(&mut root)?;
    if target.right.is_none() {
        // ruled out by the consecutive-operator check
        return Err(ParseError::internal("attachment point has no right operand"));
    }

    if target.operator.is_multiplicative() {
        let chain = std::mem::replace(target, Operation::new(operator, None, None));
        target.left = Some(Box::new(Node::BinaryOp(chain)));
    } else {
        let operand = target.right.take();
        target.right = Some(Box::new(Node::BinaryOp(Operation::new(operator, operand, None))));
    }

    Ok(root)
}

/// Handles a number token.
///
/// The literal either becomes the root of an empty tree or fills the open
/// right slot found by the right-spine search.
fn parse_literal(root: Option<Node>,
                 tokens: &[Token],
                 index: usize,
                 value: f64)
                 -> ParseResult<Node> {
    if index > 0 && token_to_operator(&tokens[index - 1]).is_none() {
        return Err(ParseError::ExpectedOperator { found: tokens[index - 1].to_string() });
    }

    match root {
        None => Ok(Node::Literal(value)),
        Some(mut root) => {
            attach_right(&mut root, Node::Literal(value))?;
            Ok(root)
        },
    }
}

/// Handles an opening parenthesis.
///
/// The matching closing parenthesis is located by depth counting, the
/// enclosed tokens are parsed recursively, and the resulting subtree is
/// attached exactly like a literal. The subtree comes back locked, so later
/// operators cannot reach into it; `2*(3+4)` multiplies by the whole group.
///
/// Returns the new root together with the index of the closing parenthesis,
/// where the caller resumes.
fn parse_group(root: Option<Node>,
               tokens: &[Token],
               index: usize)
               -> ParseResult<(Node, usize)> {
    if index > 0 && token_to_operator(&tokens[index - 1]).is_none() {
        return Err(ParseError::ExpectedOperatorBeforeParen);
    }

    let close = matching_delimiter(tokens, index)?;
    let group = parse(&tokens[index + 1..close])?;

    match root {
        None => Ok((group, close)),
        Some(mut root) => {
            attach_right(&mut root, group)?;
            Ok((root, close))
        },
    }
}

/// Finalizes a fully consumed slice.
///
/// An empty tree resolves to the literal `0`. An operation root must not
/// have an open slot left on its right spine (that would mean the expression
/// ends in an operator); it is then locked and handed back to the caller as
/// a completed unit.
fn complete(root: Option<Node>) -> ParseResult<Node> {
    match root {
        None => Ok(Node::Literal(0.0)),
        Some(Node::BinaryOp(mut operation)) => {
            if !operation.is_locked() {
                if dangling_right(&operation) {
                    return Err(ParseError::TrailingOperand);
                }
                operation.lock();
            }
            Ok(Node::BinaryOp(operation))
        },
        Some(node) => Ok(node),
    }
}
