use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContainerError>;

/// Errors returned by the container facade.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// `get` was called with an identifier that was never registered.
    #[error("Entry {id} not found")]
    NotFound { id: String },

    /// A class could not be introspected or constructed.
    #[error(transparent)]
    Reflection(#[from] ReflectionError),
}

impl ContainerError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_reflection(&self) -> bool {
        matches!(self, Self::Reflection(_))
    }
}

/// Introspection and construction failures.
#[derive(Debug, Error)]
pub enum ReflectionError {
    #[error("Class \"{class}\" does not exist")]
    ClassNotFound { class: String },

    #[error("Too few arguments to {class}::new(), {given} passed and at least {required} expected")]
    TooFewArguments {
        class: String,
        given: usize,
        required: usize,
    },

    /// `position` is 1-based.
    #[error("Argument #{position} (${parameter}) of {class}::new() must be of type {expected}, {found} given")]
    ArgumentType {
        class: String,
        position: usize,
        parameter: String,
        expected: String,
        found: String,
    },

    #[error("Construction of {class} failed: {message}")]
    Construction { class: String, message: String },

    #[error("Maximum resolution depth of {limit} exceeded: {chain}")]
    DepthExceeded { limit: usize, chain: String },
}

impl ReflectionError {
    pub fn class_not_found(class: impl Into<String>) -> Self {
        Self::ClassNotFound {
            class: class.into(),
        }
    }

    pub fn too_few_arguments(class: impl Into<String>, given: usize, required: usize) -> Self {
        Self::TooFewArguments {
            class: class.into(),
            given,
            required,
        }
    }

    pub fn argument_type(
        class: impl Into<String>,
        position: usize,
        parameter: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::ArgumentType {
            class: class.into(),
            position,
            parameter: parameter.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// For constructors that reject otherwise well-typed arguments.
    pub fn construction(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Construction {
            class: class.into(),
            message: message.into(),
        }
    }

    pub fn depth_exceeded(limit: usize, chain: impl Into<String>) -> Self {
        Self::DepthExceeded {
            limit,
            chain: chain.into(),
        }
    }
}
