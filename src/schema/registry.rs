//! Type descriptors and the registry that resolves them by name

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DefaultsError, DefaultsResult};

use super::field::FieldDescriptor;
use super::value::Value;

/// Read access to a configuration instance's fields.
pub trait Introspect {
    /// Current value of `field`, or `None` if it cannot be read.
    fn read(&self, field: &str) -> Option<Value>;
}

/// Zero-argument constructor for a registered type
pub type Constructor = fn() -> Box<dyn Introspect>;

/// Statically declared shape of one configuration type
#[derive(Clone)]
pub struct TypeDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
    constructor: Option<Constructor>,
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("constructible", &self.constructor.is_some())
            .finish()
    }
}

impl TypeDescriptor {
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name: name.into(),
            fields: Vec::new(),
            constructor: None,
        }
    }

    /// Fully-qualified name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn simple_name(&self) -> &str {
        super::simple_name(&self.name)
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn is_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    pub fn instantiate(&self) -> DefaultsResult<Box<dyn Introspect>> {
        match self.constructor {
            Some(construct) => Ok(construct()),
            None => Err(DefaultsError::Instantiation {
                type_name: self.name.clone(),
                reason: "no zero-argument constructor".to_string(),
            }),
        }
    }
}

/// Builder for [`TypeDescriptor`]
pub struct TypeDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
    constructor: Option<Constructor>,
}

impl TypeDescriptorBuilder {
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            fields: self.fields,
            constructor: self.constructor,
        }
    }
}

/// Registered configuration types, keyed by fully-qualified name
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type, replacing any previous descriptor with the same name.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.types.insert(descriptor.name.clone(), descriptor);
        self
    }

    pub fn with(mut self, descriptor: TypeDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Resolve by fully-qualified name, or by simple name when exactly one
    /// registered type has it.
    pub fn resolve(&self, name: &str) -> DefaultsResult<&TypeDescriptor> {
        if let Some(descriptor) = self.types.get(name) {
            return Ok(descriptor);
        }

        let mut by_simple = self.types.values().filter(|d| d.simple_name() == name);
        match (by_simple.next(), by_simple.next()) {
            (Some(only), None) => Ok(only),
            _ => Err(DefaultsError::TypeNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Resolve `name` as [`resolve`](Self::resolve) does and construct a
    /// default instance of it.
    pub fn instantiate(
        &self,
        name: &str,
    ) -> DefaultsResult<(&TypeDescriptor, Box<dyn Introspect>)> {
        let descriptor = self.resolve(name)?;
        let instance = descriptor.instantiate()?;
        Ok((descriptor, instance))
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;

    struct Empty;

    impl Introspect for Empty {
        fn read(&self, _field: &str) -> Option<Value> {
            None
        }
    }

    fn registry() -> TypeRegistry {
        TypeRegistry::new()
            .with(
                TypeDescriptor::builder("a.Server")
                    .field(FieldDescriptor::new("port", FieldType::Int))
                    .constructor(|| Box::new(Empty))
                    .build(),
            )
            .with(TypeDescriptor::builder("b.Server").build())
            .with(TypeDescriptor::builder("b.Client$Pool").build())
    }

    #[test]
    fn test_resolve_qualified_name() {
        let reg = registry();
        let d = reg.resolve("a.Server").unwrap();
        assert_eq!(d.simple_name(), "Server");
        assert_eq!(d.fields().len(), 1);
    }

    #[test]
    fn test_resolve_unique_simple_name() {
        let reg = registry();
        assert_eq!(reg.resolve("Pool").unwrap().name(), "b.Client$Pool");
    }

    #[test]
    fn test_resolve_ambiguous_simple_name_fails() {
        let err = registry().resolve("Server").unwrap_err();
        assert!(matches!(err, DefaultsError::TypeNotFound { name } if name == "Server"));
    }

    #[test]
    fn test_instantiate_accepts_simple_name() {
        let reg = registry()
            .with(TypeDescriptor::builder("c.Cache").constructor(|| Box::new(Empty)).build());
        let (descriptor, _) = reg.instantiate("Cache").unwrap();
        assert_eq!(descriptor.name(), "c.Cache");
        assert!(reg.instantiate("a.Server").is_ok());
    }

    #[test]
    fn test_instantiate_errors_by_kind() {
        let reg = registry();
        assert!(matches!(
            reg.instantiate("b.Server"),
            Err(DefaultsError::Instantiation { type_name, .. }) if type_name == "b.Server"
        ));
        assert!(matches!(
            reg.instantiate("missing.Type"),
            Err(DefaultsError::TypeNotFound { name }) if name == "missing.Type"
        ));
        // ambiguous simple names stay unresolved
        assert!(matches!(
            reg.instantiate("Server"),
            Err(DefaultsError::TypeNotFound { .. })
        ));
    }

    #[test]
    fn test_names_sorted() {
        let reg = registry();
        let names: Vec<_> = reg.names().collect();
        assert_eq!(names, vec!["a.Server", "b.Client$Pool", "b.Server"]);
    }
}
