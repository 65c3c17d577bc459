//! cfgdefaults - configuration defaults printer
//!
//! Describes configuration types through a statically declared schema and
//! prints each field's default value, annotated with its validation
//! constraints, as indented pseudo-YAML.

pub mod catalog;
pub mod config;
pub mod error;
pub mod introspect;
pub mod logging;
pub mod schema;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{DefaultsError, DefaultsResult};
pub use introspect::{
    describe, Introspector, Layout, PrintOptions, PrintSummary, SkippedSubtree,
};
pub use schema::{
    Constraint, Duration, FieldDescriptor, FieldType, Introspect, TimeUnit, TypeDescriptor,
    TypeRegistry, Value,
};
