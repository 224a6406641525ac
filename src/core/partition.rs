//! Static/dynamic split of a style property list.

use std::cmp::Ordering;

use serde::Serialize;
use swc_common::Spanned;
use swc_ecma_ast::{Prop, PropName, PropOrSpread};
use tracing::debug;

use super::parsers::{ParsedStyleBody, StyleExpr, parse_style_body};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyClass {
    /// Literal value, safe to hoist into the registry.
    Static,
    /// Anything computed; stays at the call site.
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// `name: value` as written, without the trailing comma.
    pub text: String,
    pub class: PropertyClass,
}

/// First-level properties of one style literal, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub properties: Vec<PropertyRecord>,
}

impl Partition {
    pub fn static_props(&self) -> Vec<String> {
        self.texts(PropertyClass::Static)
    }

    pub fn dynamic_props(&self) -> Vec<String> {
        self.texts(PropertyClass::Dynamic)
    }

    /// True when the body failed to parse or held no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn texts(&self, class: PropertyClass) -> Vec<String> {
        self.properties
            .iter()
            .filter(|prop| prop.class == class)
            .map(|prop| prop.text.clone())
            .collect()
    }
}

fn classify(prop: &PropOrSpread) -> PropertyClass {
    let is_static = match prop {
        PropOrSpread::Spread(_) => false,
        PropOrSpread::Prop(prop) => match &**prop {
            Prop::KeyValue(kv) => {
                !matches!(kv.key, PropName::Computed(_))
                    && StyleExpr::classify(&kv.value).is_literal()
            }
            Prop::Shorthand(_)
            | Prop::Assign(_)
            | Prop::Getter(_)
            | Prop::Setter(_)
            | Prop::Method(_) => false,
        },
    };
    if is_static {
        PropertyClass::Static
    } else {
        PropertyClass::Dynamic
    }
}

/// Strip the common indentation of continuation lines so a multi-line
/// property reads relative to its own first line.
fn dedent_continuation(text: &str) -> String {
    let mut lines = text.split('\n');
    let Some(first) = lines.next() else {
        return String::new();
    };
    let rest: Vec<&str> = lines.collect();
    let common = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut output = first.to_string();
    for line in rest {
        output.push('\n');
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        output.push_str(&line[indent.min(common)..]);
    }
    output
}

fn serialize(body: &ParsedStyleBody, prop: &PropOrSpread) -> String {
    dedent_continuation(body.slice(prop.span()))
}

/// Parse a comment-free property list and classify each first-level
/// property. Nested values are never visited on their own.
///
/// A body that does not parse yields an empty partition.
pub fn parse_style_properties(cleaned: &str) -> Partition {
    let body = match parse_style_body(cleaned) {
        Ok(body) => body,
        Err(err) => {
            debug!(error = %err, "style body did not parse");
            return Partition::default();
        }
    };

    let properties = body
        .object
        .props
        .iter()
        .map(|prop| PropertyRecord {
            text: serialize(&body, prop),
            class: classify(prop),
        })
        .collect();
    Partition { properties }
}

fn sort_key(prop: &str) -> String {
    let name = prop.split(':').next().unwrap_or(prop).trim();
    name.trim_matches(['\'', '"']).to_lowercase()
}

/// Normalize static property texts for a registry entry: trailing commas and
/// blanks are dropped, and with `sort` the properties are ordered by name.
///
/// Joining the result with `", "` gives the one-line form.
pub fn format_props_for_static(props: &[String], sort: bool) -> Vec<String> {
    let mut formatted: Vec<String> = props
        .iter()
        .map(|prop| prop.trim().trim_end_matches(',').trim_end().to_string())
        .filter(|prop| !prop.is_empty())
        .collect();
    if sort {
        formatted.sort_by(|a, b| match sort_key(a).cmp(&sort_key(b)) {
            Ordering::Equal => a.cmp(b),
            other => other,
        });
    }
    formatted
}
