use std::{collections::BTreeMap, sync::RwLock};

use lazy_static::lazy_static;

use crate::{
    ast::{Macro, Node},
    error::MacroError,
    interpreter::macros::{pow, sqrt},
};

/// The function a macro provides to create a new instance of itself.
///
/// The constructor receives the already-parsed argument trees in source
/// order. It must validate only the argument *count* eagerly and must not
/// evaluate any argument; evaluation happens later, when the expression as a
/// whole is evaluated.
pub type MacroConstructor = fn(Vec<Node>) -> Result<Box<dyn Macro>, MacroError>;

/// Maps macro identifiers to their constructors.
///
/// The map is ordered so that identifier listings come out sorted without
/// further work.
#[derive(Default)]
pub struct MacroRegistry {
    constructors: BTreeMap<String, MacroConstructor>,
}

impl MacroRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { constructors: BTreeMap::new() }
    }

    /// Creates a registry holding the built-in macros.
    fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("sqrt", sqrt::new_sqrt)
                .expect("builtin identifiers are distinct");
        registry.register("pow", pow::new_pow)
                .expect("builtin identifiers are distinct");
        registry
    }

    /// Installs a constructor under the given identifier.
    ///
    /// # Errors
    /// [`MacroError::DuplicateIdentifier`] if the identifier is taken.
    /// The registry is left unchanged in that case.
    pub fn register(&mut self,
                    identifier: &str,
                    constructor: MacroConstructor)
                    -> Result<(), MacroError> {
        if self.constructors.contains_key(identifier) {
            return Err(MacroError::DuplicateIdentifier { identifier: identifier.to_string() });
        }
        self.constructors.insert(identifier.to_string(), constructor);
        Ok(())
    }

    /// Looks up the constructor registered under an identifier.
    #[must_use]
    pub fn constructor(&self, identifier: &str) -> Option<MacroConstructor> {
        self.constructors.get(identifier).copied()
    }

    /// Returns all registered identifiers in sorted order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }
}

lazy_static! {
    /// The process-wide registry instance.
    ///
    /// Expressions are parsed against this registry. It is expected to be
    /// fully populated before the first parse; the lock merely keeps
    /// stray concurrent registrations from corrupting the map.
    static ref REGISTRY: RwLock<MacroRegistry> = RwLock::new(MacroRegistry::with_builtins());
}

/// Registers a macro with the process-wide registry.
///
/// This is the extension point for additional macros. They have to be
/// registered before the first expression using them is parsed.
///
/// # Errors
/// [`MacroError::DuplicateIdentifier`] if the identifier is taken.
///
/// # Examples
/// ```
/// use reckon::register_macro;
/// use reckon::interpreter::macros::sqrt::new_sqrt;
///
/// // `sqrt` is a built-in; its identifier is taken.
/// assert!(register_macro("sqrt", new_sqrt).is_err());
/// ```
pub fn register_macro(identifier: &str, constructor: MacroConstructor) -> Result<(), MacroError> {
    REGISTRY.write()
            .expect("macro registry lock poisoned")
            .register(identifier, constructor)
}

/// Looks up a constructor in the process-wide registry.
#[must_use]
pub fn constructor_for(identifier: &str) -> Option<MacroConstructor> {
    REGISTRY.read()
            .expect("macro registry lock poisoned")
            .constructor(identifier)
}

/// Returns the identifiers of all registered macros in sorted order.
///
/// # Examples
/// ```
/// let identifiers = reckon::registered_macros();
///
/// assert!(identifiers.contains(&"sqrt".to_string()));
/// assert!(identifiers.contains(&"pow".to_string()));
/// ```
#[must_use]
pub fn registered_macros() -> Vec<String> {
    REGISTRY.read()
            .expect("macro registry lock poisoned")
            .identifiers()
}
