use std::any::{Any, TypeId};
use std::collections::HashMap;

use log::debug;

use crate::core::{MethodError, Signature, Value};

type MethodFn = Box<dyn Fn(&dyn Any, &[Value]) -> std::result::Result<Vec<Value>, MethodError> + Send + Sync>;

/// Types opt into dynamic invocation by exposing a runtime name and
/// registering their callable methods.
pub trait Reflect: Any {
    fn type_name() -> &'static str
    where
        Self: Sized;

    fn register(registry: &mut MethodRegistry)
    where
        Self: Sized;
}

/// A method bound to one concrete receiver type.
pub struct Method {
    name: String,
    signature: Signature,
    body: MethodFn,
}

impl Method {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub(crate) fn call(
        &self,
        target: &dyn Any,
        args: &[Value],
    ) -> std::result::Result<Vec<Value>, MethodError> {
        (self.body)(target, args)
    }
}

/// Реестр методов: (тип получателя, имя метода) -> callable.
pub struct MethodRegistry {
    methods: HashMap<(TypeId, String), Method>,
    type_names: HashMap<TypeId, &'static str>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
            type_names: HashMap::new(),
        }
    }

    /// Registers every method a `Reflect` type declares, under the type's
    /// declared runtime name.
    pub fn register_type<T: Reflect>(&mut self) {
        self.type_names.insert(TypeId::of::<T>(), T::type_name());
        T::register(self);
    }

    /// Registers a single method for receiver type `T`. Registering the same
    /// (type, name) pair again replaces the previous entry.
    pub fn register<T, F>(&mut self, name: impl Into<String>, signature: Signature, body: F)
    where
        T: Any,
        F: Fn(&T, &[Value]) -> std::result::Result<Vec<Value>, MethodError> + Send + Sync + 'static,
    {
        let name = name.into();
        self.type_names
            .entry(TypeId::of::<T>())
            .or_insert_with(short_type_name::<T>);

        let body: MethodFn = Box::new(move |target, args| {
            let Some(target) = target.downcast_ref::<T>() else {
                // lookup is keyed by the receiver's own TypeId
                unreachable!();
            };
            body(target, args)
        });

        debug!(
            "registered method '{}.{}'",
            self.type_name(TypeId::of::<T>()),
            name
        );
        self.methods.insert(
            (TypeId::of::<T>(), name.clone()),
            Method {
                name,
                signature,
                body,
            },
        );
    }

    pub fn lookup(&self, type_id: TypeId, name: &str) -> Option<&Method> {
        self.methods.get(&(type_id, name.to_string()))
    }

    /// Diagnostic name for a receiver type; types never registered have no
    /// recorded name.
    pub fn type_name(&self, type_id: TypeId) -> &str {
        self.type_names.get(&type_id).copied().unwrap_or("unknown type")
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
