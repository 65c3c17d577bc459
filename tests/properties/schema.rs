//! Random schema generation shared by the printer properties.

#![allow(dead_code)]

use proptest::prelude::*;

use cfgdefaults::{
    Constraint, FieldDescriptor, FieldType, Introspect, TimeUnit, TypeDescriptor, TypeRegistry,
    Value,
};

/// Instance whose every field reads as null.
pub struct NullInstance;

impl Introspect for NullInstance {
    fn read(&self, _field: &str) -> Option<Value> {
        Some(Value::Null)
    }
}

/// Scalar fields of one generated type
pub type Level = Vec<(FieldType, Vec<Constraint>)>;

pub fn type_name(depth: usize) -> String {
    format!("prop.T{depth}")
}

pub fn scalar_name(depth: usize, index: usize) -> String {
    format!("t{depth}s{index}")
}

pub fn child_name(depth: usize) -> String {
    format!("t{depth}child")
}

fn time_unit() -> impl Strategy<Value = TimeUnit> {
    prop_oneof![
        Just(TimeUnit::Milliseconds),
        Just(TimeUnit::Seconds),
        Just(TimeUnit::Minutes),
    ]
}

pub fn constraint() -> impl Strategy<Value = Constraint> {
    prop_oneof![
        Just(Constraint::NotEmpty),
        any::<i64>().prop_map(Constraint::Min),
        any::<i64>().prop_map(Constraint::Max),
        (0i64..1000, time_unit()).prop_map(|(v, u)| Constraint::min_duration(v, u)),
        (0i64..1000, time_unit()).prop_map(|(v, u)| Constraint::max_duration(v, u)),
        Just(Constraint::JsonProperty),
        Just(Constraint::unknown("JsonProperty")),
        "[A-Z][a-z]{0,8}".prop_map(Constraint::unknown),
    ]
}

pub fn scalar_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::String),
        Just(FieldType::Bool),
        Just(FieldType::Int),
        Just(FieldType::Long),
        Just(FieldType::Double),
        Just(FieldType::Duration),
        Just(FieldType::Mapping),
        "[A-Z][a-z]{1,6}".prop_map(FieldType::enumeration),
    ]
}

pub fn level() -> impl Strategy<Value = Level> {
    proptest::collection::vec(
        (scalar_type(), proptest::collection::vec(constraint(), 0..4)),
        0..5,
    )
}

/// A chain of types `prop.T0 -> prop.T1 -> ...`, one level per entry.
pub fn chain() -> impl Strategy<Value = Vec<Level>> {
    proptest::collection::vec(level(), 1..5)
}

/// Register the chain. Type `i` holds its scalars followed by a composite
/// field pointing at type `i + 1`, except for the last type.
pub fn registry_for(levels: &[Level]) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for (depth, level) in levels.iter().enumerate() {
        let mut builder = TypeDescriptor::builder(type_name(depth));
        for (index, (field_type, constraints)) in level.iter().enumerate() {
            let mut field = FieldDescriptor::new(scalar_name(depth, index), field_type.clone());
            for constraint in constraints {
                field = field.constraint(constraint.clone());
            }
            builder = builder.field(field);
        }
        if depth + 1 < levels.len() {
            builder = builder.field(FieldDescriptor::new(
                child_name(depth),
                FieldType::composite(type_name(depth + 1)),
            ));
        }
        registry.register(builder.constructor(|| Box::new(NullInstance)).build());
    }
    registry
}
