use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        macros::registry,
        parser::{
            core::{ParseResult, parse, token_to_operator},
            utils::{attach_right, matching_delimiter},
        },
    },
};

/// Handles a macro identifier.
///
/// The identifier is resolved against the registry, the brace-delimited
/// argument list is split on top-level commas, and every argument slice is
/// parsed recursively before the registered constructor builds the macro
/// instance from the finished argument trees. The instance is wrapped in a
/// [`Node::MacroCall`] and attached exactly like a literal.
///
/// Arguments are never evaluated here; the macro owns them as parsed trees
/// and evaluates them lazily.
///
/// Returns the new root together with the index of the closing brace, where
/// the caller resumes.
///
/// # Errors
/// - [`ParseError::ExpectedOperatorBeforeIdentifier`] if the identifier does
///   not start the slice or follow an operator.
/// - [`ParseError::UnknownMacro`] if no constructor is registered.
/// - [`ParseError::ExpectedOpenBrace`] / [`ParseError::UnmatchedBrace`] for
///   a missing argument list.
/// - [`ParseError::Macro`] if the constructor rejects the argument list.
/// - Any error from parsing an argument slice.
pub(in crate::interpreter::parser) fn parse_macro_call(root: Option<Node>,
                                                       tokens: &[Token],
                                                       index: usize,
                                                       identifier: &str)
                                                       -> ParseResult<(Node, usize)> {
    if index > 0 && token_to_operator(&tokens[index - 1]).is_none() {
        return Err(ParseError::ExpectedOperatorBeforeIdentifier { identifier:
                                                                      identifier.to_string(), });
    }

    let Some(constructor) = registry::constructor_for(identifier) else {
        return Err(ParseError::UnknownMacro { identifier: identifier.to_string() });
    };

    let brace = index + 1;
    if tokens.get(brace) != Some(&Token::LBrace) {
        return Err(ParseError::ExpectedOpenBrace { identifier: identifier.to_string() });
    }
    let close = matching_delimiter(tokens, brace)?;

    let mut arguments = Vec::new();
    for slice in split_arguments(&tokens[brace + 1..close])? {
        arguments.push(parse(slice)?);
    }

    let instance = constructor(arguments)?;
    let node = Node::MacroCall(instance);

    match root {
        None => Ok((node, close)),
        Some(mut root) => {
            attach_right(&mut root, node)?;
            Ok((root, close))
        },
    }
}

/// Splits an argument list on its top-level commas.
///
/// Commas inside a nested brace pair belong to the nested macro call and are
/// skipped over along with the whole pair. An empty list yields no argument
/// slices at all, while a comma next to a delimiter yields an empty slice
/// that later parses to the literal `0`.
///
/// # Errors
/// - [`ParseError::UnexpectedClosingBrace`] for a closing brace that has no
///   opener inside the list.
/// - [`ParseError::UnmatchedBrace`] for a nested opener that never closes.
fn split_arguments(tokens: &[Token]) -> ParseResult<Vec<&[Token]>> {
    let mut slices = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < tokens.len() {
        match tokens[index] {
            Token::Comma => {
                slices.push(&tokens[start..index]);
                start = index + 1;
            },
            Token::RBrace => return Err(ParseError::UnexpectedClosingBrace),
            Token::LBrace => {
                index = matching_delimiter(tokens, index)?;
            },
            _ => {},
        }
        index += 1;
    }

    if !tokens.is_empty() {
        slices.push(&tokens[start..]);
    }

    Ok(slices)
}
