use std::collections::BTreeMap;
use std::fmt;

use crate::spec::DefaultParams;

/// A registered producer of default values.
pub type DefaultFn = dyn Fn(&DefaultParams) -> String + Send + Sync;

/// Name → default-function table consulted by `function` questions.
///
/// Filled during setup, then shared read-only across resolution passes.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, Box<DefaultFn>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `function` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&DefaultParams) -> String + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    pub fn lookup(&self, name: &str) -> Option<&DefaultFn> {
        self.functions.get(name).map(Box::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}
