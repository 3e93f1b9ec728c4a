use std::env;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};

/// Environment variable holding the maximum resolution depth.
pub const MAX_DEPTH_ENV: &str = "AUTOWIRE_MAX_DEPTH";
/// Environment variable selecting the [`AutofillMode`].
pub const AUTOFILL_ENV: &str = "AUTOWIRE_AUTOFILL";

/// How missing required constructor arguments are filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum AutofillMode {
    /// Append a placeholder for every typed, non-nullable parameter of the
    /// constructor, regardless of how many explicit arguments were given.
    #[default]
    Literal,
    /// Only append placeholders for parameters past the explicit arguments.
    UnfilledOnly,
}

/// Resolution settings for a [`Container`](crate::Container).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Upper bound on nested class constructions during one registration.
    /// `None` leaves recursion unbounded.
    pub max_depth: Option<usize>,
    pub autofill: AutofillMode,
}

impl ContainerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `AUTOWIRE_MAX_DEPTH` and `AUTOWIRE_AUTOFILL`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(depth) => config.max_depth = Some(depth),
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", MAX_DEPTH_ENV, raw, e),
            }
        }

        if let Some(raw) = lookup(AUTOFILL_ENV) {
            match AutofillMode::from_str(raw.trim()) {
                Ok(mode) => config.autofill = mode,
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", AUTOFILL_ENV, raw, e),
            }
        }

        config
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_autofill(mut self, mode: AutofillMode) -> Self {
        self.autofill = mode;
        self
    }
}
