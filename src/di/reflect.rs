//! Constructor metadata and the class catalog.
//!
//! Classes describe themselves through the [`Class`] trait: a name, the
//! constructor's parameter list, the interfaces they implement, and a
//! constructor that builds an instance from positional [`Arguments`].
//! A [`ClassCatalog`] is the lookup table the resolver introspects.

use crate::di::value::{CasterFn, ClassInfo, InterfaceBinding, Object, Value};
use crate::error::ReflectionError;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

/// A single constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// Class, interface or scalar type name. `None` for untyped parameters.
    pub declared_type: Option<String>,
    pub nullable: bool,
    pub has_default: bool,
}

impl Parameter {
    pub fn typed(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: Some(declared_type.into()),
            nullable: false,
            has_default: false,
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            nullable: true,
            has_default: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// `Type $param = null`: nullable and defaulted.
    pub fn optional(self) -> Self {
        self.nullable().with_default()
    }

    pub fn is_required(&self) -> bool {
        !self.has_default
    }

    /// Whether a missing argument for this parameter gets a type placeholder.
    pub(crate) fn is_autofillable(&self) -> bool {
        !self.nullable && self.declared_type.is_some()
    }
}

/// The ordered parameter list of a constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn required_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.is_required()).count()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl From<Vec<Parameter>> for Signature {
    fn from(parameters: Vec<Parameter>) -> Self {
        Self::new(parameters)
    }
}

/// A type the container can introspect and construct.
///
/// # Example
/// ```
/// use autowire::{Arguments, Class, Parameter, ReflectionError, Signature};
/// use std::sync::Arc;
///
/// struct Engine;
///
/// impl Class for Engine {
///     const NAME: &'static str = "Engine";
///
///     fn construct(_args: &Arguments) -> Result<Self, ReflectionError> {
///         Ok(Engine)
///     }
/// }
///
/// struct Car {
///     engine: Arc<Engine>,
/// }
///
/// impl Class for Car {
///     const NAME: &'static str = "Car";
///
///     fn signature() -> Signature {
///         Signature::new(vec![Parameter::typed("engine", "Engine")])
///     }
///
///     fn construct(args: &Arguments) -> Result<Self, ReflectionError> {
///         Ok(Car { engine: args.object::<Engine>(0)? })
///     }
/// }
/// ```
pub trait Class: Sized + Send + Sync + 'static {
    /// The name used as class reference and default identifier.
    const NAME: &'static str;

    /// Constructor parameters in declaration order. Empty by default.
    fn signature() -> Signature {
        Signature::default()
    }

    /// Declares the interfaces this class can be used as.
    fn interfaces(_interfaces: &mut Interfaces<Self>) {}

    fn construct(args: &Arguments) -> Result<Self, ReflectionError>;
}

/// Collects the interface bindings of a class.
pub struct Interfaces<T> {
    bindings: Vec<InterfaceBinding>,
    _class: PhantomData<fn() -> T>,
}

impl<T: Class> Interfaces<T> {
    pub(crate) fn new() -> Self {
        Self {
            bindings: Vec::new(),
            _class: PhantomData,
        }
    }

    /// Declares that `T` implements the interface `name`, reachable as `Arc<I>`.
    pub fn bind<I, F>(&mut self, name: &'static str, caster_fn: F) -> &mut Self
    where
        I: ?Sized + Any + Send + Sync,
        F: Fn(Arc<T>) -> Arc<I> + Send + Sync + 'static,
    {
        let caster: CasterFn = Arc::new(move |instance: Arc<dyn Any + Send + Sync>| {
            let concrete = instance.downcast::<T>().ok()?;
            let interface: Arc<I> = caster_fn(concrete);
            Some(Box::new(interface) as Box<dyn Any + Send + Sync>)
        });

        self.bindings.push(InterfaceBinding {
            name,
            type_id: TypeId::of::<I>(),
            caster,
        });
        self
    }

    pub(crate) fn into_bindings(self) -> Vec<InterfaceBinding> {
        self.bindings
    }
}

/// Resolved positional arguments handed to [`Class::construct`].
///
/// The typed accessors report mismatches as [`ReflectionError`]s naming the
/// class, position and parameter.
pub struct Arguments {
    class: &'static str,
    signature: Signature,
    values: Vec<Value>,
}

impl Arguments {
    pub(crate) fn new(class: &'static str, signature: Signature, values: Vec<Value>) -> Self {
        Self {
            class,
            signature,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// The raw value at `index`, or an arity error.
    pub fn value(&self, index: usize) -> Result<&Value, ReflectionError> {
        self.values.get(index).ok_or_else(|| {
            ReflectionError::too_few_arguments(
                self.class,
                self.values.len(),
                self.signature.required_count().max(index + 1),
            )
        })
    }

    pub fn object<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>, ReflectionError> {
        let value = self.value(index)?;
        value
            .downcast::<T>()
            .ok_or_else(|| self.mismatch(index, value))
    }

    /// Missing and null arguments both read as `None`.
    pub fn optional_object<T: Any + Send + Sync>(
        &self,
        index: usize,
    ) -> Result<Option<Arc<T>>, ReflectionError> {
        match self.values.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.object::<T>(index).map(Some),
        }
    }

    pub fn interface<I: ?Sized + Any + Send + Sync>(
        &self,
        index: usize,
    ) -> Result<Arc<I>, ReflectionError> {
        let value = self.value(index)?;
        value
            .as_object()
            .and_then(Object::cast::<I>)
            .ok_or_else(|| self.mismatch(index, value))
    }

    pub fn optional_interface<I: ?Sized + Any + Send + Sync>(
        &self,
        index: usize,
    ) -> Result<Option<Arc<I>>, ReflectionError> {
        match self.values.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.interface::<I>(index).map(Some),
        }
    }

    pub fn string(&self, index: usize) -> Result<String, ReflectionError> {
        let value = self.value(index)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.mismatch(index, value))
    }

    pub fn bool(&self, index: usize) -> Result<bool, ReflectionError> {
        let value = self.value(index)?;
        value.as_bool().ok_or_else(|| self.mismatch(index, value))
    }

    pub fn int(&self, index: usize) -> Result<i64, ReflectionError> {
        let value = self.value(index)?;
        value.as_int().ok_or_else(|| self.mismatch(index, value))
    }

    pub fn float(&self, index: usize) -> Result<f64, ReflectionError> {
        let value = self.value(index)?;
        match value {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            _ => Err(self.mismatch(index, value)),
        }
    }

    fn mismatch(&self, index: usize, found: &Value) -> ReflectionError {
        let parameter = self.signature.parameters().get(index);
        ReflectionError::argument_type(
            self.class,
            index + 1,
            parameter.map_or("", |p| p.name.as_str()),
            parameter
                .and_then(|p| p.declared_type.as_deref())
                .unwrap_or("mixed"),
            found.type_name(),
        )
    }
}

type ConstructorFn =
    Arc<dyn Fn(&Arguments) -> Result<Arc<dyn Any + Send + Sync>, ReflectionError> + Send + Sync>;

/// Everything the resolver needs to know about one class.
#[derive(Clone)]
pub struct ClassDescriptor {
    info: Arc<ClassInfo>,
    signature: Signature,
    constructor: ConstructorFn,
}

impl ClassDescriptor {
    pub fn of<T: Class>() -> Self {
        Self {
            info: ClassInfo::of::<T>(),
            signature: T::signature(),
            constructor: Arc::new(|args: &Arguments| {
                T::construct(args).map(|instance| Arc::new(instance) as Arc<dyn Any + Send + Sync>)
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn info(&self) -> &ClassInfo {
        &self.info
    }

    /// Builds an instance from fully resolved positional values.
    ///
    /// Surplus values are accepted and ignored by typed accessors; fewer
    /// values than required parameters is an error.
    pub fn construct(&self, values: Vec<Value>) -> Result<Object, ReflectionError> {
        let required = self.signature.required_count();
        if values.len() < required {
            return Err(ReflectionError::too_few_arguments(
                self.name(),
                values.len(),
                required,
            ));
        }

        let args = Arguments::new(self.name(), self.signature.clone(), values);
        let instance = (self.constructor)(&args)?;
        Ok(Object::with_class(self.info.clone(), instance))
    }
}

/// Name-indexed set of constructible classes.
#[derive(Default)]
pub struct ClassCatalog {
    classes: DashMap<String, Arc<ClassDescriptor>>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `T` under [`Class::NAME`], replacing any previous class of that name.
    pub fn add<T: Class>(&self) -> &Self {
        self.insert(ClassDescriptor::of::<T>());
        self
    }

    pub fn insert(&self, descriptor: ClassDescriptor) {
        self.classes
            .insert(descriptor.name().to_owned(), Arc::new(descriptor));
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    pub fn describe(&self, class: &str) -> Result<Arc<ClassDescriptor>, ReflectionError> {
        self.classes
            .get(class)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ReflectionError::class_not_found(class))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
