//! # Autowire
//!
//! A service locator with constructor-based autowiring for Rust.
//!
//! Values are stored under string identifiers. Classes known to the
//! container's [`ClassCatalog`] can be registered by name: the container reads
//! the constructor's parameter list, resolves every missing collaborator from
//! its registry (or constructs and registers it on the fly), and builds the
//! object.
//!
//! ## Features
//!
//! - **Autowiring**: constructor parameters are filled from registered entries
//!   or by constructing the named class recursively
//! - **Interfaces**: registering an implementation under an interface name makes
//!   it the argument for parameters typed with that interface
//! - **Explicit arguments**: objects, scalars and type references can be passed
//!   positionally and take precedence
//! - **Factories**: values can be produced by a closure that receives the
//!   container
//!
//! ## Quick Start
//!
//! ```rust
//! use autowire::prelude::*;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "Hello".to_string()
//!     }
//! }
//!
//! impl Class for English {
//!     const NAME: &'static str = "English";
//!
//!     fn interfaces(interfaces: &mut Interfaces<Self>) {
//!         interfaces.bind::<dyn Greeter, _>("Greeter", |e| e as Arc<dyn Greeter>);
//!     }
//!
//!     fn construct(_args: &Arguments) -> std::result::Result<Self, ReflectionError> {
//!         Ok(English)
//!     }
//! }
//!
//! struct Welcome {
//!     greeter: Arc<dyn Greeter>,
//! }
//!
//! impl Class for Welcome {
//!     const NAME: &'static str = "Welcome";
//!
//!     fn signature() -> Signature {
//!         Signature::new(vec![Parameter::typed("greeter", "Greeter")])
//!     }
//!
//!     fn construct(args: &Arguments) -> std::result::Result<Self, ReflectionError> {
//!         Ok(Welcome { greeter: args.interface::<dyn Greeter>(0)? })
//!     }
//! }
//!
//! let mut container = ContainerBuilder::new()
//!     .class::<English>()
//!     .class::<Welcome>()
//!     .build();
//!
//! container.register_as("Greeter", "English").unwrap();
//! let welcome = container.register("Welcome").unwrap();
//!
//! assert_eq!(welcome.downcast::<Welcome>().unwrap().greeter.greet(), "Hello");
//! ```

pub mod config;
pub mod di;
pub mod error;

// Re-export core types
pub use config::{AutofillMode, ContainerConfig};
pub use di::{
    Arg, Arguments, Class, ClassCatalog, ClassDescriptor, ClassInfo, Container,
    ContainerBuilder, Entry, Interfaces, Object, Parameter, Registry, ServiceLocator, Signature,
    Value,
};
pub use error::{ContainerError, ReflectionError, Result};

/// Prelude module for convenient imports
///
/// ```
/// use autowire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{AutofillMode, ContainerConfig};
    pub use crate::di::{
        Arg, Arguments, Class, ClassCatalog, Container, ContainerBuilder, Interfaces, Object,
        Parameter, ServiceLocator, Signature, Value,
    };
    pub use crate::error::{ContainerError, ReflectionError, Result};
    pub use std::sync::Arc;
}
