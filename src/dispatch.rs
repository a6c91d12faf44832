//! One `process` entry point over all three containers.
//!
//! [`Process`] stands in for overloading: each container picks its own
//! output type through the associated type, and [`process`] forwards to it.
//! [`Dispatcher`] does the same work with a loaded [`DispatchConfig`].

use tracing::{debug, warn};

use crate::config::DispatchConfig;
use crate::erased::{describe, describe_with, ErasedValue};
use crate::error::{DispatchError, Result};
use crate::optional::{process_optional, process_optional_or};
use crate::variant::{process_variant, Variant};

pub trait Process {
    type Output;

    fn process(&self) -> Self::Output;
}

impl Process for Option<i32> {
    type Output = i32;

    fn process(&self) -> i32 {
        process_optional(*self)
    }
}

impl Process for ErasedValue {
    type Output = Result<String>;

    fn process(&self) -> Result<String> {
        describe(self)
    }
}

impl Process for Variant {
    type Output = i32;

    fn process(&self) -> i32 {
        process_variant(self)
    }
}

pub fn process<T: Process + ?Sized>(value: &T) -> T::Output {
    value.process()
}

/// Runs each dispatch with configured defaults and labels.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn optional(&self, value: Option<i32>) -> i32 {
        let result = process_optional_or(value, self.config.default_value);
        debug!(present = value.is_some(), result, "dispatched optional");
        result
    }

    pub fn erased(&self, value: &ErasedValue) -> Result<String> {
        match describe_with(value, &self.config.labels) {
            Ok(text) => {
                debug!(type_name = value.type_name(), %text, "dispatched erased value");
                Ok(text)
            }
            Err(err @ DispatchError::UnsupportedType { .. }) => {
                warn!(type_name = value.type_name(), "unsupported type in erased dispatch");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    pub fn variant(&self, value: &Variant) -> i32 {
        let result = process_variant(value);
        debug!(?value, result, "dispatched variant");
        result
    }
}
