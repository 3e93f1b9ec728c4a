use crate::config::{AutofillMode, ContainerConfig};
use crate::di::reflect::{Class, ClassCatalog};
use crate::di::value::Value;
use crate::di::Container;
use std::sync::Arc;

/// Builder for assembling a container from classes, settings and instances.
///
/// # Example
/// ```
/// use autowire::{Arguments, Class, ContainerBuilder, ReflectionError};
///
/// struct Clock;
///
/// impl Class for Clock {
///     const NAME: &'static str = "Clock";
///
///     fn construct(_args: &Arguments) -> Result<Self, ReflectionError> {
///         Ok(Clock)
///     }
/// }
///
/// let mut container = ContainerBuilder::new()
///     .class::<Clock>()
///     .instance("timezone", "UTC")
///     .max_depth(16)
///     .build();
///
/// container.register("Clock").unwrap();
/// assert!(container.has("Clock"));
/// assert_eq!(container.get("timezone").unwrap().as_str(), Some("UTC"));
/// ```
pub struct ContainerBuilder {
    catalog: Arc<ClassCatalog>,
    config: ContainerConfig,
    instances: Vec<(String, Value)>,
}

impl ContainerBuilder {
    /// Create a new container builder with an empty catalog
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(ClassCatalog::new()),
            config: ContainerConfig::default(),
            instances: Vec::new(),
        }
    }

    /// Use a shared catalog. Classes added afterwards go into it.
    pub fn catalog(mut self, catalog: Arc<ClassCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Make a class constructible
    pub fn class<T: Class>(self) -> Self {
        self.catalog.add::<T>();
        self
    }

    pub fn config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }

    pub fn autofill(mut self, mode: AutofillMode) -> Self {
        self.config.autofill = mode;
        self
    }

    /// Pre-register a value, in call order
    pub fn instance(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.instances.push((id.into(), value.into()));
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        let mut container = Container::with_config(self.catalog, self.config);
        for (id, value) in self.instances {
            container.register_instance(&id, value);
        }
        container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_preserves_instance_order() {
        let container = ContainerBuilder::new()
            .instance("b", 2)
            .instance("a", 1)
            .build();
        assert_eq!(container.ids().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_build_applies_config() {
        let container = ContainerBuilder::new()
            .max_depth(4)
            .autofill(AutofillMode::UnfilledOnly)
            .build();
        assert_eq!(container.config().max_depth, Some(4));
        assert_eq!(container.config().autofill, AutofillMode::UnfilledOnly);
    }

    #[test]
    fn test_shared_catalog() {
        let catalog = Arc::new(ClassCatalog::new());
        let first = ContainerBuilder::new().catalog(catalog.clone()).build();
        let second = ContainerBuilder::new().catalog(catalog).build();
        assert!(std::ptr::eq(first.catalog(), second.catalog()));
    }
}
