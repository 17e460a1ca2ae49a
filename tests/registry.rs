use reckon::{
    ast::{Macro, Node},
    error::{Error, MacroError, RuntimeError},
    evaluate,
    interpreter::{evaluator::EvalResult, lexer::tokenize, parser::core::parse},
    register_macro, registered_macros,
};

/// Doubles its single argument. Used to exercise the extension point.
#[derive(Debug)]
struct Twice {
    value: Node,
}

impl Macro for Twice {
    fn eval(&self) -> EvalResult<f64> {
        Ok(self.value.eval()? * 2.0)
    }
}

fn new_twice(arguments: Vec<Node>) -> Result<Box<dyn Macro>, MacroError> {
    match <[Node; 1]>::try_from(arguments) {
        Ok([value]) => Ok(Box::new(Twice { value })),
        Err(arguments) => {
            Err(MacroError::WrongArgumentCount { expected: 1,
                                                 got:      arguments.len(), })
        },
    }
}

/// Takes no arguments and always fails to evaluate.
#[derive(Debug)]
struct Broken;

impl Macro for Broken {
    fn eval(&self) -> EvalResult<f64> {
        Err(RuntimeError::Macro { detail: "always fails".to_string() })
    }
}

fn new_broken(arguments: Vec<Node>) -> Result<Box<dyn Macro>, MacroError> {
    if !arguments.is_empty() {
        return Err(MacroError::WrongArgumentCount { expected: 0,
                                                    got:      arguments.len(), });
    }
    Ok(Box::new(Broken))
}

#[test]
fn registered_macros_are_usable() {
    register_macro("twice", new_twice).unwrap();

    assert_eq!(evaluate("twice{21}").unwrap(), 42.0);
    assert_eq!(evaluate("1+twice{sqrt{4}}").unwrap(), 5.0);
    assert!(registered_macros().contains(&"twice".to_string()));
}

#[test]
fn duplicate_identifiers_are_rejected() {
    // The builtin already owns this identifier.
    assert!(matches!(register_macro("sqrt", new_twice),
                     Err(MacroError::DuplicateIdentifier { .. })));

    register_macro("dup", new_twice).unwrap();
    assert!(matches!(register_macro("dup", new_twice),
                     Err(MacroError::DuplicateIdentifier { .. })));
}

#[test]
fn listing_contains_builtins_in_order() {
    let identifiers = registered_macros();

    assert!(identifiers.contains(&"sqrt".to_string()));
    assert!(identifiers.contains(&"pow".to_string()));
    assert!(identifiers.windows(2).all(|pair| pair[0] <= pair[1]),
            "identifiers are not sorted: {identifiers:?}");
}

#[test]
fn macro_failures_surface_at_evaluation_time() {
    register_macro("broken", new_broken).unwrap();

    // Construction must not evaluate anything: the expression parses fine
    // and only fails once it is evaluated.
    let tokens = tokenize("1+broken{}").unwrap();
    let root = parse(&tokens).unwrap();

    assert!(matches!(root.eval(), Err(RuntimeError::Macro { .. })));
    assert!(matches!(evaluate("1+broken{}"), Err(Error::Runtime(RuntimeError::Macro { .. }))));
}
