pub mod convert;
pub mod registry;

pub use registry::{Method, MethodRegistry, Reflect};

use std::any::Any;

use log::debug;

use crate::core::{InvokeError, Result, Value};

/// Resolves and calls methods by runtime name against an opaque receiver,
/// coercing each argument to the declared parameter type first.
///
/// The invoker owns a [`MethodRegistry`]; receivers are matched by their
/// concrete `TypeId`, so the same registry serves any number of types.
pub struct Invoker {
    registry: MethodRegistry,
}

impl Invoker {
    pub fn new(registry: MethodRegistry) -> Self {
        Self { registry }
    }

    /// Invoker preloaded with the bundled demo types.
    pub fn with_demo_types() -> Self {
        let mut registry = MethodRegistry::new();
        registry.register_type::<crate::shapes::Shape>();
        Self::new(registry)
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut MethodRegistry {
        &mut self.registry
    }

    /// Resolves `name` against the receiver's runtime type, validates arity,
    /// reconciles argument types, and calls the method.
    ///
    /// All failures come back as an [`InvokeError`]; an error raised by the
    /// method body itself is wrapped as `InvocationFailed` with the original
    /// cause as its source. On success the method's return values come back
    /// in declaration order (possibly empty). All-or-nothing: no partial
    /// results accompany an error.
    pub fn invoke(&self, target: &dyn Any, name: &str, args: &[Value]) -> Result<Vec<Value>> {
        let type_id = target.type_id();
        let method = self.registry.lookup(type_id, name).ok_or_else(|| {
            InvokeError::MethodNotFound(
                name.to_string(),
                self.registry.type_name(type_id).to_string(),
            )
        })?;

        let signature = method.signature();
        signature.check_arity(name, args.len())?;

        let mut coerced = Vec::with_capacity(args.len());
        for (i, arg) in args.iter().enumerate() {
            let Some(expected) = signature.expected_at(i) else {
                // arity check bounds every index
                unreachable!();
            };
            if arg.is_null() {
                return Err(InvokeError::InvalidArgument(name.to_string(), i, expected));
            }
            coerced.push(convert::coerce(name, i, arg, expected)?);
        }

        debug!(
            "dispatching '{}.{}' with {} args",
            self.registry.type_name(type_id),
            name,
            coerced.len()
        );
        method
            .call(target, &coerced)
            .map_err(|e| InvokeError::InvocationFailed(name.to_string(), e))
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::with_demo_types()
    }
}
