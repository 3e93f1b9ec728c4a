//! Constructor argument resolution.
//!
//! Turning a partial argument list into a constructed object happens in three
//! steps:
//!
//! 1. **Autofill**: when fewer arguments than required parameters are given,
//!    a [`Arg::Type`] placeholder is appended for each typed, non-nullable
//!    parameter (see [`AutofillMode`]).
//! 2. **Resolve**: every placeholder becomes the registry entry of that name,
//!    or, when it names a known class, that class is registered under its own
//!    name and the last registry entry that is an instance of it is used.
//!    Anything else becomes a literal string.
//! 3. **Construct**: the class constructor receives the values positionally.
//!
//! Nested registrations are pushed on an explicit stack so that
//! [`ContainerConfig::max_depth`] can stop runaway circular graphs. Without a
//! limit a cycle recurses until the thread's stack is exhausted.

use crate::config::{AutofillMode, ContainerConfig};
use crate::di::reflect::{ClassCatalog, ClassDescriptor, Signature};
use crate::di::registry::Registry;
use crate::di::value::{Arg, Object, Value};
use crate::error::ReflectionError;
use tracing::{debug, trace};

pub(crate) struct Resolver<'a> {
    catalog: &'a ClassCatalog,
    registry: &'a mut Registry,
    config: &'a ContainerConfig,
    stack: Vec<&'static str>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(
        catalog: &'a ClassCatalog,
        registry: &'a mut Registry,
        config: &'a ContainerConfig,
    ) -> Self {
        Self {
            catalog,
            registry,
            config,
            stack: Vec::new(),
        }
    }

    /// Constructs `class` from `params` and stores the object under `id`.
    ///
    /// A failure leaves entries registered by earlier nested calls in place.
    pub(crate) fn register(
        &mut self,
        id: &str,
        class: &str,
        params: Vec<Arg>,
    ) -> Result<Object, ReflectionError> {
        let object = self.instantiate(class, params)?;
        self.registry.insert(id, Value::Object(object.clone()));
        debug!("Registered {} as {}", id, object.class_name());
        Ok(object)
    }

    fn instantiate(&mut self, class: &str, params: Vec<Arg>) -> Result<Object, ReflectionError> {
        let descriptor = self.catalog.describe(class)?;
        self.enter(descriptor.name())?;

        let result = self
            .resolve_arguments(&descriptor, params)
            .and_then(|values| descriptor.construct(values));

        self.stack.pop();
        result
    }

    fn enter(&mut self, class: &'static str) -> Result<(), ReflectionError> {
        if let Some(limit) = self.config.max_depth {
            if self.stack.len() >= limit {
                let mut chain = self.stack.clone();
                chain.push(class);
                return Err(ReflectionError::depth_exceeded(limit, chain.join(" -> ")));
            }
        }
        self.stack.push(class);
        Ok(())
    }

    pub(crate) fn resolve_arguments(
        &mut self,
        descriptor: &ClassDescriptor,
        params: Vec<Arg>,
    ) -> Result<Vec<Value>, ReflectionError> {
        let params = self.autofill(descriptor.signature(), params);
        trace!(
            "Resolving {} argument(s) for {}",
            params.len(),
            descriptor.name()
        );
        params.into_iter().map(|arg| self.resolve(arg)).collect()
    }

    fn autofill(&self, signature: &Signature, mut params: Vec<Arg>) -> Vec<Arg> {
        if params.len() >= signature.required_count() {
            return params;
        }

        match self.config.autofill {
            AutofillMode::Literal => {
                for parameter in signature.parameters() {
                    if !parameter.is_autofillable() {
                        continue;
                    }
                    if let Some(declared) = &parameter.declared_type {
                        params.push(Arg::Type(declared.clone()));
                    }
                }
            }
            AutofillMode::UnfilledOnly => {
                // Skipped parameters get a null so later placeholders stay aligned.
                let explicit = params.len();
                for parameter in signature.parameters().iter().skip(explicit) {
                    match &parameter.declared_type {
                        Some(declared) if parameter.is_autofillable() => {
                            params.push(Arg::Type(declared.clone()));
                        }
                        _ => params.push(Arg::Value(Value::Null)),
                    }
                }
                while params.len() > explicit
                    && matches!(params.last(), Some(Arg::Value(Value::Null)))
                {
                    params.pop();
                }
            }
        }

        params
    }

    fn resolve(&mut self, arg: Arg) -> Result<Value, ReflectionError> {
        let name = match arg {
            Arg::Value(value) => return Ok(value),
            Arg::Type(name) => name,
        };

        if let Some(value) = self.registry.get(&name) {
            trace!("{} resolved from registry", name);
            return Ok(value.clone());
        }

        if !self.catalog.contains(&name) {
            trace!("{} is not a registered entry or class, passing it as a string", name);
            return Ok(Value::Str(name));
        }

        debug!("Auto-registering {}", name);
        self.register(&name, &name, Vec::new())?;

        // No early exit: the last matching entry in insertion order wins.
        let mut resolved = Value::Str(name.clone());
        for entry in self.registry.iter() {
            if entry.value().is_instance_of(&name) {
                resolved = entry.value().clone();
            }
        }
        Ok(resolved)
    }
}
