//! Field descriptors

use super::constraint::Constraint;

/// Declared type of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Bool,
    Int,
    Long,
    Double,
    Duration,
    /// Enum type, by simple name
    Enum(String),
    Mapping,
    /// Nested configuration type, by registered name
    Composite(String),
}

impl FieldType {
    pub fn enumeration(name: impl Into<String>) -> Self {
        FieldType::Enum(name.into())
    }

    pub fn composite(type_name: impl Into<String>) -> Self {
        FieldType::Composite(type_name.into())
    }

    /// Scalars are printed directly; everything else is recursed into.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldType::Composite(_))
    }

    /// Simple type name shown in constraint comments.
    pub fn simple_name(&self) -> &str {
        match self {
            FieldType::String => "String",
            FieldType::Bool => "boolean",
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::Double => "double",
            FieldType::Duration => "Duration",
            FieldType::Mapping => "Map",
            FieldType::Enum(name) => name,
            FieldType::Composite(name) => super::simple_name(name),
        }
    }
}

/// One declared field of a configuration type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    field_type: FieldType,
    type_label: Option<String>,
    constraints: Vec<Constraint>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            type_label: None,
            constraints: Vec::new(),
        }
    }

    /// Append a constraint; declaration order is kept.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Override the simple type name, e.g. `Integer` for a boxed int.
    pub fn type_label(mut self, label: impl Into<String>) -> Self {
        self.type_label = Some(label.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_scalar(&self) -> bool {
        self.field_type.is_scalar()
    }

    pub fn simple_type_name(&self) -> &str {
        self.type_label
            .as_deref()
            .unwrap_or_else(|| self.field_type.simple_name())
    }

    /// Registered name of the nested type, for composite fields.
    pub fn composite_type(&self) -> Option<&str> {
        match &self.field_type {
            FieldType::Composite(name) => Some(name),
            _ => None,
        }
    }
}
