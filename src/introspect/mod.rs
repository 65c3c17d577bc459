//! Annotated defaults printer
//!
//! Walks a [`TypeDescriptor`] field by field and writes one pseudo-YAML line
//! per field, preceded by a `# <Type>( ... )` comment when the field carries
//! constraints. Composite fields are followed by the fields of a freshly
//! constructed default instance of their type, one indent level deeper.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DefaultsError, DefaultsResult};
use crate::schema::{
    annotation_comment, qualifying_count, FieldDescriptor, Introspect, TypeDescriptor,
    TypeRegistry,
};


/// One indent unit
pub const INDENT: &str = "  ";

/// Default limit on composite nesting
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Comment lines only for constrained scalars, no blank lines
    #[default]
    Compact,
    /// Comment line for every scalar and a blank line after every value
    Legacy,
}

impl Layout {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Some(Layout::Compact),
            "legacy" => Some(Layout::Legacy),
            _ => None,
        }
    }
}

/// Printer options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    pub layout: Layout,
    pub max_depth: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Compact,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A composite field whose children were not printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSubtree {
    /// Dotted field path from the root, e.g. `database.pool`
    pub path: String,
    pub type_name: String,
    pub reason: String,
}

/// Outcome of a completed traversal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrintSummary {
    /// Lines written, blank lines included
    pub lines: usize,
    pub skipped: Vec<SkippedSubtree>,
}

/// Prints configuration defaults for types known to a registry
pub struct Introspector<'r> {
    registry: &'r TypeRegistry,
    options: PrintOptions,
}

impl<'r> Introspector<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            options: PrintOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PrintOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve `type_name`, build its default instance and print it at depth 0.
    ///
    /// Unlike nested composites, a root type that cannot be constructed is an error.
    pub fn print_defaults(
        &self,
        type_name: &str,
        sink: &mut dyn Write,
    ) -> DefaultsResult<PrintSummary> {
        let (descriptor, instance) = self.registry.instantiate(type_name)?;
        self.print(descriptor, instance.as_ref(), 0, sink)
    }

    /// Print every field of `instance` starting at `indent`.
    pub fn print(
        &self,
        descriptor: &TypeDescriptor,
        instance: &dyn Introspect,
        indent: usize,
        sink: &mut dyn Write,
    ) -> DefaultsResult<PrintSummary> {
        let mut report = Report {
            sink,
            layout: self.options.layout,
            summary: PrintSummary::default(),
        };
        self.visit(descriptor, instance, indent, "", &mut report)?;
        report.sink.flush()?;
        Ok(report.summary)
    }

    fn visit(
        &self,
        descriptor: &TypeDescriptor,
        instance: &dyn Introspect,
        indent: usize,
        path: &str,
        report: &mut Report<'_>,
    ) -> DefaultsResult<()> {
        if indent > self.options.max_depth {
            return Err(DefaultsError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        debug!(type_name = descriptor.name(), depth = indent, "visiting type");

        for field in descriptor.fields() {
            let field_path = if path.is_empty() {
                field.name().to_string()
            } else {
                format!("{path}.{}", field.name())
            };

            match field.composite_type() {
                None => {
                    let value = instance.read(field.name()).ok_or_else(|| {
                        DefaultsError::Access {
                            type_name: descriptor.name().to_string(),
                            field: field.name().to_string(),
                        }
                    })?;
                    report.annotated_value(field, &value.to_string(), indent)?;
                }
                Some(nested_name) => {
                    report.value(field.name(), "", indent)?;
                    self.visit_composite(nested_name, indent + 1, &field_path, report)?;
                }
            }
        }

        Ok(())
    }

    fn visit_composite(
        &self,
        type_name: &str,
        indent: usize,
        path: &str,
        report: &mut Report<'_>,
    ) -> DefaultsResult<()> {
        match self.registry.instantiate(type_name) {
            Ok((descriptor, instance)) => {
                self.visit(descriptor, instance.as_ref(), indent, path, report)
            }
            Err(err @ (DefaultsError::Instantiation { .. } | DefaultsError::TypeNotFound { .. })) => {
                warn!(
                    field = path,
                    type_name,
                    error = %err,
                    "skipping composite field without a default instance"
                );
                report.summary.skipped.push(SkippedSubtree {
                    path: path.to_string(),
                    type_name: type_name.to_string(),
                    reason: err.to_string(),
                });
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// Line writer shared by one traversal
struct Report<'w> {
    sink: &'w mut dyn Write,
    layout: Layout,
    summary: PrintSummary,
}

impl Report<'_> {
    fn annotated_value(
        &mut self,
        field: &FieldDescriptor,
        value: &str,
        indent: usize,
    ) -> DefaultsResult<()> {
        let constrained = qualifying_count(field.constraints()) > 0;
        if constrained || self.layout == Layout::Legacy {
            let comment = annotation_comment(field.simple_type_name(), field.constraints());
            self.line(indent, &comment)?;
        }
        self.value(field.name(), value, indent)
    }

    fn value(&mut self, name: &str, value: &str, indent: usize) -> DefaultsResult<()> {
        self.line(indent, &format!("{name}: {value}"))?;
        if self.layout == Layout::Legacy {
            writeln!(self.sink)?;
            self.summary.lines += 1;
        }
        Ok(())
    }

    fn line(&mut self, indent: usize, text: &str) -> DefaultsResult<()> {
        writeln!(self.sink, "{}{text}", INDENT.repeat(indent))?;
        self.summary.lines += 1;
        Ok(())
    }
}

/// Write a field table for `descriptor` without instantiating it.
pub fn describe(descriptor: &TypeDescriptor, sink: &mut dyn Write) -> DefaultsResult<()> {
    let constructible = if descriptor.is_constructible() {
        ""
    } else {
        " (no default constructor)"
    };
    writeln!(sink, "{}{constructible}", descriptor.name())?;

    for field in descriptor.fields() {
        let kind = if field.is_scalar() { "scalar" } else { "composite" };
        let constraints: Vec<String> = field
            .constraints()
            .iter()
            .filter(|c| !c.is_marker())
            .map(ToString::to_string)
            .collect();
        let line = format!(
            "{INDENT}{:<28} {:<12} {:<9} {}",
            field.name(),
            field.simple_type_name(),
            kind,
            constraints.join("; ")
        );
        writeln!(sink, "{}", line.trim_end())?;
    }

    sink.flush()?;
    Ok(())
}
