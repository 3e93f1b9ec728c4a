mod builder;
mod container;
mod reflect;
mod registry;
mod resolver;
mod value;

pub use builder::ContainerBuilder;
pub use container::{Container, ServiceLocator};
pub use reflect::{
    Arguments, Class, ClassCatalog, ClassDescriptor, Interfaces, Parameter, Signature,
};
pub use registry::{Entry, Registry};
pub use value::{Arg, ClassInfo, Object, Value};
