//! Built-in configuration types
//!
//! The registry returned by [`builtin`] describes cfgdefaults' own
//! configuration plus the "hello world" sample application configuration.

use std::collections::BTreeMap;

use crate::config::{Config, LogLevel, OutputConfig, TraversalConfig};
use crate::introspect::Layout;
use crate::schema::{
    Constraint, Duration, FieldDescriptor, FieldType, Introspect, TimeUnit, TypeDescriptor,
    TypeRegistry, Value,
};

pub const CONFIG: &str = "cfgdefaults.Config";
pub const OUTPUT_CONFIG: &str = "cfgdefaults.OutputConfig";
pub const TRAVERSAL_CONFIG: &str = "cfgdefaults.TraversalConfig";
pub const HELLO_WORLD: &str = "example.HelloWorldConfiguration";
pub const DATA_SOURCE: &str = "example.DataSourceFactory";
pub const SERVER: &str = "example.ServerFactory";

/// Registry with every built-in type.
pub fn builtin() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    register_builtin(&mut registry);
    registry
}

pub fn register_builtin(registry: &mut TypeRegistry) {
    registry
        .register(config_type())
        .register(output_config_type())
        .register(traversal_config_type())
        .register(hello_world_type())
        .register(data_source_type())
        .register(server_type());
}

// ---------- cfgdefaults' own configuration ----------

fn config_type() -> TypeDescriptor {
    TypeDescriptor::builder(CONFIG)
        .field(FieldDescriptor::new("default_type", FieldType::String).constraint(Constraint::NotEmpty))
        .field(FieldDescriptor::new("output", FieldType::composite(OUTPUT_CONFIG)))
        .field(FieldDescriptor::new("traversal", FieldType::composite(TRAVERSAL_CONFIG)))
        .constructor(|| Box::new(Config::default()))
        .build()
}

fn output_config_type() -> TypeDescriptor {
    TypeDescriptor::builder(OUTPUT_CONFIG)
        .field(FieldDescriptor::new("layout", FieldType::enumeration("Layout")))
        .field(FieldDescriptor::new("log_level", FieldType::enumeration("LogLevel")))
        .constructor(|| Box::new(OutputConfig::default()))
        .build()
}

fn traversal_config_type() -> TypeDescriptor {
    TypeDescriptor::builder(TRAVERSAL_CONFIG)
        .field(
            FieldDescriptor::new("max_depth", FieldType::Long)
                .type_label("usize")
                .constraint(Constraint::Min(0)),
        )
        .constructor(|| Box::new(TraversalConfig::default()))
        .build()
}

impl Introspect for Config {
    fn read(&self, field: &str) -> Option<Value> {
        match field {
            "default_type" => Some(self.default_type.as_str().into()),
            _ => None,
        }
    }
}

impl Introspect for OutputConfig {
    fn read(&self, field: &str) -> Option<Value> {
        match field {
            "layout" => Some(Value::enumeration(match self.layout {
                Layout::Compact => "compact",
                Layout::Legacy => "legacy",
            })),
            "log_level" => Some(Value::enumeration(self.log_level.as_str())),
            _ => None,
        }
    }
}

impl Introspect for TraversalConfig {
    fn read(&self, field: &str) -> Option<Value> {
        match field {
            "max_depth" => Some(self.max_depth.into()),
            _ => None,
        }
    }
}

// ---------- sample application configuration ----------

/// Sample application configuration
#[derive(Debug, Clone)]
pub struct HelloWorldConfiguration {
    pub template: String,
    pub default_name: String,
    pub view_renderer_configuration: BTreeMap<String, String>,
}

impl Default for HelloWorldConfiguration {
    fn default() -> Self {
        Self {
            template: "Hello, %s!".to_string(),
            default_name: "Stranger".to_string(),
            view_renderer_configuration: BTreeMap::new(),
        }
    }
}

impl Introspect for HelloWorldConfiguration {
    fn read(&self, field: &str) -> Option<Value> {
        match field {
            "template" => Some(self.template.as_str().into()),
            "defaultName" => Some(self.default_name.as_str().into()),
            "viewRendererConfiguration" => Some((&self.view_renderer_configuration).into()),
            _ => None,
        }
    }
}

/// Database connection pool settings
#[derive(Debug, Clone)]
pub struct DataSourceFactory {
    pub driver_class: Option<String>,
    pub url: Option<String>,
    pub user: Option<String>,
    pub abandon_when_percentage_full: i32,
    pub max_wait_for_connection: Duration,
    pub validation_query_timeout: Duration,
    pub log_level: LogLevel,
    pub min_size: i32,
    pub max_size: i32,
    pub check_connection_while_idle: bool,
    pub properties: BTreeMap<String, String>,
}

impl Default for DataSourceFactory {
    fn default() -> Self {
        Self {
            driver_class: None,
            url: None,
            user: None,
            abandon_when_percentage_full: 0,
            max_wait_for_connection: Duration::seconds(30),
            validation_query_timeout: Duration::seconds(10),
            log_level: LogLevel::Info,
            min_size: 10,
            max_size: 100,
            check_connection_while_idle: true,
            properties: BTreeMap::new(),
        }
    }
}

impl Introspect for DataSourceFactory {
    fn read(&self, field: &str) -> Option<Value> {
        let value: Value = match field {
            "driverClass" => self.driver_class.as_deref().into(),
            "url" => self.url.as_deref().into(),
            "user" => self.user.as_deref().into(),
            "abandonWhenPercentageFull" => self.abandon_when_percentage_full.into(),
            "maxWaitForConnection" => self.max_wait_for_connection.into(),
            "validationQueryTimeout" => self.validation_query_timeout.into(),
            "logLevel" => Value::enumeration(self.log_level.as_str().to_uppercase()),
            "minSize" => self.min_size.into(),
            "maxSize" => self.max_size.into(),
            "checkConnectionWhileIdle" => self.check_connection_while_idle.into(),
            "properties" => (&self.properties).into(),
            _ => return None,
        };
        Some(value)
    }
}

fn hello_world_type() -> TypeDescriptor {
    TypeDescriptor::builder(HELLO_WORLD)
        .field(
            FieldDescriptor::new("template", FieldType::String)
                .constraint(Constraint::NotEmpty)
                .constraint(Constraint::JsonProperty),
        )
        .field(
            FieldDescriptor::new("defaultName", FieldType::String)
                .constraint(Constraint::JsonProperty)
                .constraint(Constraint::NotEmpty),
        )
        .field(
            FieldDescriptor::new("database", FieldType::composite(DATA_SOURCE))
                .constraint(Constraint::unknown("Valid"))
                .constraint(Constraint::unknown("NotNull")),
        )
        .field(
            FieldDescriptor::new("server", FieldType::composite(SERVER))
                .constraint(Constraint::unknown("Valid"))
                .constraint(Constraint::unknown("NotNull")),
        )
        .field(
            FieldDescriptor::new("viewRendererConfiguration", FieldType::Mapping)
                .constraint(Constraint::unknown("NotNull")),
        )
        .constructor(|| Box::new(HelloWorldConfiguration::default()))
        .build()
}

fn data_source_type() -> TypeDescriptor {
    TypeDescriptor::builder(DATA_SOURCE)
        .field(FieldDescriptor::new("driverClass", FieldType::String).constraint(not_null()))
        .field(FieldDescriptor::new("url", FieldType::String).constraint(Constraint::NotEmpty))
        .field(FieldDescriptor::new("user", FieldType::String))
        .field(
            FieldDescriptor::new("abandonWhenPercentageFull", FieldType::Int)
                .constraint(Constraint::Min(0))
                .constraint(Constraint::Max(100)),
        )
        .field(
            FieldDescriptor::new("maxWaitForConnection", FieldType::Duration)
                .constraint(not_null())
                .constraint(Constraint::min_duration(1, TimeUnit::Seconds)),
        )
        .field(
            FieldDescriptor::new("validationQueryTimeout", FieldType::Duration)
                .constraint(Constraint::max_duration(5, TimeUnit::Minutes)),
        )
        .field(FieldDescriptor::new("logLevel", FieldType::enumeration("Level")).constraint(not_null()))
        .field(FieldDescriptor::new("minSize", FieldType::Int).constraint(Constraint::Min(0)))
        .field(FieldDescriptor::new("maxSize", FieldType::Int).constraint(Constraint::Min(1)))
        .field(FieldDescriptor::new("checkConnectionWhileIdle", FieldType::Bool))
        .field(FieldDescriptor::new("properties", FieldType::Mapping).constraint(not_null()))
        .constructor(|| Box::new(DataSourceFactory::default()))
        .build()
}

/// Polymorphic in the sample application, so there is no default instance.
fn server_type() -> TypeDescriptor {
    TypeDescriptor::builder(SERVER)
        .field(
            FieldDescriptor::new("maxThreads", FieldType::Int)
                .constraint(Constraint::Min(2)),
        )
        .field(
            FieldDescriptor::new("shutdownGracePeriod", FieldType::Duration)
                .constraint(not_null()),
        )
        .build()
}

fn not_null() -> Constraint {
    Constraint::unknown("NotNull")
}
