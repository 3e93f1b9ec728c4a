use crate::di::reflect::{Class, Interfaces};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Type alias for a function that casts a concrete instance to an interface.
/// The returned box holds an `Arc<dyn Interface>`.
pub(crate) type CasterFn =
    Arc<dyn Fn(Arc<dyn Any + Send + Sync>) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

/// An interface implemented by a class, plus the cast to reach it.
#[derive(Clone)]
pub(crate) struct InterfaceBinding {
    pub(crate) name: &'static str,
    pub(crate) type_id: TypeId,
    pub(crate) caster: CasterFn,
}

/// Runtime metadata shared by every object of one class.
pub struct ClassInfo {
    name: &'static str,
    interfaces: Vec<InterfaceBinding>,
}

impl ClassInfo {
    pub(crate) fn of<T: Class>() -> Arc<Self> {
        let mut interfaces = Interfaces::<T>::new();
        T::interfaces(&mut interfaces);
        Arc::new(Self {
            name: T::NAME,
            interfaces: interfaces.into_bindings(),
        })
    }

    fn opaque<T: Any>() -> Arc<Self> {
        Arc::new(Self {
            name: std::any::type_name::<T>(),
            interfaces: Vec::new(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn interface_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.interfaces.iter().map(|binding| binding.name)
    }

    pub fn is_a(&self, type_name: &str) -> bool {
        self.name == type_name || self.interfaces.iter().any(|b| b.name == type_name)
    }
}

/// A constructed instance: a shared handle plus its class metadata.
///
/// Clones share the same instance, so identity survives being stored in the
/// registry and handed to several constructors.
#[derive(Clone)]
pub struct Object {
    class: Arc<ClassInfo>,
    instance: Arc<dyn Any + Send + Sync>,
}

impl Object {
    pub fn new<T: Class>(instance: T) -> Self {
        Self::from_arc(Arc::new(instance))
    }

    pub fn from_arc<T: Class>(instance: Arc<T>) -> Self {
        Self {
            class: ClassInfo::of::<T>(),
            instance,
        }
    }

    /// Wraps a value that has no class description. Its class name is the
    /// Rust type name and it implements no interfaces.
    pub fn opaque<T: Any + Send + Sync>(instance: T) -> Self {
        Self {
            class: ClassInfo::opaque::<T>(),
            instance: Arc::new(instance),
        }
    }

    pub(crate) fn with_class(class: Arc<ClassInfo>, instance: Arc<dyn Any + Send + Sync>) -> Self {
        Self { class, instance }
    }

    pub fn class_name(&self) -> &'static str {
        self.class.name()
    }

    pub fn class(&self) -> &ClassInfo {
        &self.class
    }

    /// True when the object's class is `type_name` or implements it.
    pub fn is_instance_of(&self, type_name: &str) -> bool {
        self.class.is_a(type_name)
    }

    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.instance.clone().downcast::<T>().ok()
    }

    /// Casts to an interface the class declared, e.g. `obj.cast::<dyn Greeter>()`.
    pub fn cast<I: ?Sized + Any + Send + Sync>(&self) -> Option<Arc<I>> {
        let type_id = TypeId::of::<I>();
        let binding = self.class.interfaces.iter().find(|b| b.type_id == type_id)?;
        let boxed = (binding.caster)(self.instance.clone())?;
        boxed.downcast::<Arc<I>>().ok().map(|wrapper| *wrapper)
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class", &self.class.name)
            .field("instance", &Arc::as_ptr(&self.instance))
            .finish()
    }
}

/// A runtime value: what the registry stores and constructors receive.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Object(Object),
}

impl Value {
    pub fn object<T: Class>(instance: T) -> Self {
        Value::Object(Object::new(instance))
    }

    /// Name used in type mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Object(object) => object.class_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Shortcut for `as_object()` followed by `downcast()`.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.as_object().and_then(Object::downcast::<T>)
    }

    pub fn is_instance_of(&self, type_name: &str) -> bool {
        self.as_object()
            .is_some_and(|object| object.is_instance_of(type_name))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One entry of a constructor argument list before resolution.
#[derive(Debug, Clone)]
pub enum Arg {
    /// Passed to the constructor as is. Strings are never treated as class names.
    Value(Value),
    /// Resolved against the registry, or by constructing the named class.
    Type(String),
}

impl Arg {
    pub fn value(value: impl Into<Value>) -> Self {
        Arg::Value(value.into())
    }

    pub fn type_ref(name: impl Into<String>) -> Self {
        Arg::Type(name.into())
    }

    pub fn object<T: Class>(instance: T) -> Self {
        Arg::Value(Value::object(instance))
    }
}

macro_rules! literal_arg_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Value(value.into())
                }
            }
        )*
    };
}

literal_arg_from!(Value, Object, bool, i64, i32, f64, String, &str);
