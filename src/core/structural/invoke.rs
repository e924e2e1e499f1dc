//! Calling a function or a named method on every element.

use crate::core::collection::Collection;
use crate::core::query::map;
use crate::error::{KernelError, Result};
use std::collections::HashMap;
use std::fmt;

type Method<T, A, R> = Box<dyn Fn(&T, &[A]) -> R>;

/// Methods callable by name on receivers of type `T` with arguments `A`.
pub struct MethodTable<T, A, R> {
    methods: HashMap<String, Method<T, A, R>>,
}

impl<T, A, R> MethodTable<T, A, R> {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Register `method` under `name`, replacing any previous entry
    pub fn register<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&T, &[A]) -> R + 'static,
    {
        self.methods.insert(name.into(), Box::new(method));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn get(&self, name: &str) -> Option<&Method<T, A, R>> {
        self.methods.get(name)
    }
}

impl<T, A, R> Default for MethodTable<T, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A, R> fmt::Debug for MethodTable<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("methods", &self.names())
            .finish()
    }
}

/// Call `function` with each element as the receiver and `args` as the
/// arguments. Results are in element order.
pub fn invoke<C, A, R, F>(collection: &C, mut function: F, args: &[A]) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, &[A]) -> R,
{
    map(collection, |item| function(item, args))
}

/// Call the method registered as `name` on each element.
///
/// Fails with [`KernelError::UnknownMethod`] when `name` is not in
/// `methods`, unless the collection is empty: nothing is invoked then, so
/// nothing can fail.
pub fn invoke_named<C, A, R>(
    collection: &C,
    methods: &MethodTable<C::Item, A, R>,
    name: &str,
    args: &[A],
) -> Result<Vec<R>>
where
    C: Collection + ?Sized,
{
    if collection.is_empty() {
        return Ok(Vec::new());
    }
    let method = methods
        .get(name)
        .ok_or_else(|| KernelError::unknown_method(name))?;
    Ok(map(collection, |item| method(item, args)))
}
