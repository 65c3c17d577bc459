//! Statically declared configuration schema
//!
//! Each configuration type is described once by a [`TypeDescriptor`]:
//! its fields in declaration order, their declared types and constraints,
//! and an optional zero-argument constructor. A [`TypeRegistry`] resolves
//! type names and builds default instances for the printer.

mod constraint;
mod field;
mod registry;
mod value;

pub use constraint::{annotation_comment, qualifying_count, Constraint, TimeUnit, JSON_PROPERTY};
pub use field::{FieldDescriptor, FieldType};
pub use registry::{Constructor, Introspect, TypeDescriptor, TypeDescriptorBuilder, TypeRegistry};
pub use value::{Duration, Value};

/// Last segment of a qualified name (`a.b.Outer$Inner` -> `Inner`).
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit(['.', '$'])
        .next()
        .unwrap_or(qualified)
}
