//! Property tests for the defaults printer.

use proptest::prelude::*;

use cfgdefaults::schema::qualifying_count;
use cfgdefaults::{catalog, DefaultsError, Introspector, Layout, PrintOptions};

use crate::schema::{chain, child_name, registry_for, scalar_name, type_name, Level};

fn render(levels: &[Level], layout: Layout) -> String {
    let registry = registry_for(levels);
    let introspector = Introspector::new(&registry).with_options(PrintOptions {
        layout,
        ..PrintOptions::default()
    });
    let mut out = Vec::new();
    introspector
        .print_defaults(&type_name(0), &mut out)
        .expect("generated chain should print");
    String::from_utf8(out).expect("printer writes UTF-8")
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every line of a type at depth d is indented by exactly 2*d spaces.
    #[test]
    fn property_indentation_matches_depth(levels in chain()) {
        let output = render(&levels, Layout::Compact);
        let lines: Vec<&str> = output.lines().collect();

        let mut cursor = 0;
        for (depth, level) in levels.iter().enumerate() {
            let expected = 2 * depth;
            for index in 0..level.len() {
                let prefix = format!("{}: ", scalar_name(depth, index));
                while !lines[cursor].trim_start().starts_with(&prefix) {
                    prop_assert_eq!(leading_spaces(lines[cursor]), expected);
                    cursor += 1;
                }
                prop_assert_eq!(leading_spaces(lines[cursor]), expected);
                cursor += 1;
            }
            if depth + 1 < levels.len() {
                prop_assert_eq!(lines[cursor].to_string(), format!("{}{}: ", " ".repeat(expected), child_name(depth)));
                cursor += 1;
            }
        }
        prop_assert_eq!(cursor, lines.len());
    }

    /// PROPERTY: in the compact layout a comment precedes a value iff a constraint qualifies.
    #[test]
    fn property_comment_iff_qualifying_constraint(levels in chain()) {
        let output = render(&levels, Layout::Compact);
        let lines: Vec<&str> = output.lines().collect();

        for (depth, level) in levels.iter().enumerate() {
            for (index, (_, constraints)) in level.iter().enumerate() {
                let prefix = format!("{}: ", scalar_name(depth, index));
                let at = lines
                    .iter()
                    .position(|l| l.trim_start().starts_with(&prefix))
                    .expect("every scalar field is printed");
                let commented = at > 0 && lines[at - 1].trim_start().starts_with('#');
                prop_assert_eq!(commented, qualifying_count(constraints) > 0);
            }
        }
    }

    /// PROPERTY: the legacy layout comments every scalar and adds one blank line per value.
    #[test]
    fn property_legacy_comments_every_scalar(levels in chain()) {
        let output = render(&levels, Layout::Legacy);
        let scalars: usize = levels.iter().map(Vec::len).sum();
        let composites = levels.len() - 1;

        let comments = output.lines().filter(|l| l.trim_start().starts_with('#')).count();
        let blanks = output.lines().filter(|l| l.is_empty()).count();
        prop_assert_eq!(comments, scalars);
        prop_assert_eq!(blanks, scalars + composites);
    }

    /// PROPERTY: the serialization marker never appears in any layout.
    #[test]
    fn property_json_property_never_rendered(levels in chain()) {
        for layout in [Layout::Compact, Layout::Legacy] {
            let output = render(&levels, layout);
            prop_assert!(!output.contains("JsonProperty"));
        }
    }

    /// PROPERTY: traversal fails exactly when the chain is deeper than max_depth.
    #[test]
    fn property_depth_limit(levels in chain(), max_depth in 0usize..5) {
        let registry = registry_for(&levels);
        let introspector = Introspector::new(&registry).with_options(PrintOptions {
            max_depth,
            ..PrintOptions::default()
        });
        let mut out = Vec::new();
        let result = introspector.print_defaults(&type_name(0), &mut out);

        let deepest = levels.len() - 1;
        if deepest > max_depth {
            let is_depth_error = matches!(result, Err(DefaultsError::DepthExceeded { .. }));
            prop_assert!(is_depth_error);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// PROPERTY: printing an arbitrary type name never panics.
    #[test]
    fn property_print_defaults_never_panics(name in "(?s).{0,64}") {
        let registry = catalog::builtin();
        let introspector = Introspector::new(&registry);
        let mut out = Vec::new();
        let _ = introspector.print_defaults(&name, &mut out);
    }
}
