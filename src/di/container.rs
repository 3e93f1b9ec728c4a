use crate::config::ContainerConfig;
use crate::di::reflect::ClassCatalog;
use crate::di::registry::{Entry, Registry};
use crate::di::resolver::Resolver;
use crate::di::value::{Arg, Object, Value};
use crate::error::{ContainerError, Result};
use std::sync::Arc;

/// Read-only lookup side of a container.
pub trait ServiceLocator {
    /// Returns the value stored under `id`.
    ///
    /// # Errors
    /// [`ContainerError::NotFound`] when nothing is registered under `id`.
    fn get(&self, id: &str) -> Result<&Value>;

    /// Whether `get(id)` would succeed.
    fn has(&self, id: &str) -> bool;
}

/// Service locator with constructor autowiring.
///
/// The container owns its registry exclusively. The class catalog is shared
/// and may be handed to several containers.
#[derive(Clone)]
pub struct Container {
    catalog: Arc<ClassCatalog>,
    registry: Registry,
    config: ContainerConfig,
}

impl Container {
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(ClassCatalog::new()))
    }

    pub fn with_catalog(catalog: Arc<ClassCatalog>) -> Self {
        Self::with_config(catalog, ContainerConfig::default())
    }

    pub fn with_config(catalog: Arc<ClassCatalog>, config: ContainerConfig) -> Self {
        Self {
            catalog,
            registry: Registry::new(),
            config,
        }
    }

    /// Constructs the class named `id` and stores it under `id`.
    pub fn register(&mut self, id: &str) -> Result<Object> {
        self.register_with(id, None, Vec::new())
    }

    /// Constructs `class` and stores it under `id`.
    ///
    /// Registering an implementation under an interface name makes it the
    /// argument for later constructor parameters of that interface type.
    pub fn register_as(&mut self, id: &str, class: &str) -> Result<Object> {
        self.register_with(id, Some(class), Vec::new())
    }

    /// Constructs `class` (or `id` when `None`) with `params` as leading
    /// constructor arguments and stores it under `id`, replacing any earlier
    /// entry.
    ///
    /// Missing dependencies are resolved from the registry or constructed and
    /// registered on the fly.
    ///
    /// # Errors
    /// [`ContainerError::Reflection`] when the class or one of its
    /// dependencies is unknown or cannot be constructed. Dependencies
    /// registered before the failure stay registered.
    pub fn register_with(
        &mut self,
        id: &str,
        class: Option<&str>,
        params: Vec<Arg>,
    ) -> Result<Object> {
        let class = class.unwrap_or(id);
        let mut resolver = Resolver::new(&self.catalog, &mut self.registry, &self.config);
        resolver.register(id, class, params).map_err(|e| {
            tracing::debug!("Registration of {} failed: {}", id, e);
            ContainerError::from(e)
        })
    }

    /// Stores `value` under `id` as is.
    pub fn register_instance(&mut self, id: &str, value: impl Into<Value>) -> Value {
        let value = self.registry.insert(id, value.into()).clone();
        tracing::debug!("Registered instance {} ({})", id, value.type_name());
        value
    }

    /// Invokes `factory` with the container and stores its result under `id`.
    ///
    /// An error returned by the factory is propagated and nothing is stored.
    pub fn register_factory<V, F>(&mut self, id: &str, factory: F) -> Result<Value>
    where
        V: Into<Value>,
        F: FnOnce(&mut Container) -> Result<V>,
    {
        let value = factory(self)?;
        Ok(self.register_instance(id, value))
    }

    pub fn get(&self, id: &str) -> Result<&Value> {
        self.registry
            .get(id)
            .ok_or_else(|| ContainerError::not_found(id))
    }

    pub fn has(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    /// Identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.registry.ids()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.registry.iter()
    }

    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceLocator for Container {
    fn get(&self, id: &str) -> Result<&Value> {
        Container::get(self, id)
    }

    fn has(&self, id: &str) -> bool {
        Container::has(self, id)
    }
}
