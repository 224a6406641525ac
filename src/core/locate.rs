//! Finds the inline style literals to extract.
//!
//! One traversal collects every `style={...}` attribute and every JSX
//! element as owned records; cursor lookup and bulk collection then work on
//! those records without touching the AST again.

use std::ops::Range;

use serde::Serialize;
use swc_common::Spanned;
use swc_ecma_ast::{JSXAttr, JSXAttrName, JSXAttrValue, JSXElement, JSXExpr};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

use super::parsers::{ParsedModule, StyleExpr};
use super::source::LineIndex;

/// Whether the target replaces a whole `style=` attribute or one object
/// inside a `style={[...]}` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    Attribute,
    ArrayElement,
}

/// Indentation of the line a target starts on, plus the two nested levels
/// used when composing an array replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indentation {
    pub base: String,
    pub array: String,
    pub object: String,
}

impl Indentation {
    pub fn from_base(base: &str) -> Self {
        Self {
            base: base.to_string(),
            array: format!("{}\t", base),
            object: format!("{}\t\t", base),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTarget {
    /// Byte range replaced by the call-site rewrite.
    pub range: Range<usize>,
    pub kind: TargetKind,
    /// Property list between the object braces, trimmed.
    pub body: String,
    pub indent: Indentation,
}

impl StyleTarget {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() || self.body == "{}"
    }
}

/// Outcome of a cursor lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    Target(StyleTarget),
    /// The cursor sits on `style={registry.entry}`.
    AliasDetected,
    NotFound,
}

/// Value of a `style={...}` attribute, reduced to what the locator needs.
#[derive(Debug, Clone)]
enum SiteValue {
    Object(Range<usize>),
    /// Object-literal elements only; other elements stay untouched.
    Array(Vec<Range<usize>>),
    Member,
    Other,
}

#[derive(Debug, Clone)]
struct StyleSite {
    attr: Range<usize>,
    expr: Range<usize>,
    value: SiteValue,
    /// Index of the owning element in `StyleSites::elements`.
    element: Option<usize>,
}

#[derive(Debug, Clone)]
struct ElementSpan {
    range: Range<usize>,
    depth: usize,
}

struct StyleSites<'a> {
    parsed: &'a ParsedModule,
    sites: Vec<StyleSite>,
    elements: Vec<ElementSpan>,
    open: Vec<usize>,
}

impl<'a> StyleSites<'a> {
    fn collect(parsed: &'a ParsedModule) -> Self {
        let mut collector = Self {
            parsed,
            sites: Vec::new(),
            elements: Vec::new(),
            open: Vec::new(),
        };
        parsed.module.visit_with(&mut collector);
        collector
    }

    fn site_value(&self, style: StyleExpr<'_>) -> SiteValue {
        match style {
            StyleExpr::ObjectLiteral(object) => SiteValue::Object(self.parsed.range(object.span)),
            StyleExpr::ArrayLiteral(array) => SiteValue::Array(
                array
                    .elems
                    .iter()
                    .flatten()
                    .filter(|elem| elem.spread.is_none())
                    .filter_map(|elem| match StyleExpr::classify(&elem.expr) {
                        StyleExpr::ObjectLiteral(object) => Some(self.parsed.range(object.span)),
                        StyleExpr::ArrayLiteral(_)
                        | StyleExpr::MemberAccess(_)
                        | StyleExpr::Literal(_)
                        | StyleExpr::Other(_) => None,
                    })
                    .collect(),
            ),
            StyleExpr::MemberAccess(_) => SiteValue::Member,
            StyleExpr::Literal(_) | StyleExpr::Other(_) => SiteValue::Other,
        }
    }
}

impl Visit for StyleSites<'_> {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let index = self.elements.len();
        self.elements.push(ElementSpan {
            range: self.parsed.range(node.span),
            depth: self.open.len(),
        });
        self.open.push(index);
        node.visit_children_with(self);
        self.open.pop();
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let is_style = matches!(&node.name, JSXAttrName::Ident(ident) if ident.sym == "style");
        if is_style
            && let Some(JSXAttrValue::JSXExprContainer(container)) = &node.value
            && let JSXExpr::Expr(expr) = &container.expr
        {
            let value = self.site_value(StyleExpr::classify(expr));
            self.sites.push(StyleSite {
                attr: self.parsed.range(node.span),
                expr: self.parsed.range(expr.span()),
                value,
                element: self.open.last().copied(),
            });
        }
        node.visit_children_with(self);
    }
}

fn contains(range: &Range<usize>, offset: usize) -> bool {
    range.start <= offset && offset <= range.end
}

fn make_target(
    text: &str,
    index: &LineIndex<'_>,
    range: Range<usize>,
    object: &Range<usize>,
    kind: TargetKind,
) -> StyleTarget {
    let inner = text
        .get(object.start + 1..object.end.saturating_sub(1))
        .unwrap_or_default();
    StyleTarget {
        indent: Indentation::from_base(index.indent_at(range.start)),
        range,
        kind,
        body: inner.trim().to_string(),
    }
}

/// Find the style literal under the cursor at byte `offset`.
///
/// A `style` attribute whose expression contains the cursor wins outright.
/// Otherwise the enclosing elements are tried from deepest (then latest
/// starting) outward, taking the first object literal in their own style
/// attributes.
pub fn find_at_cursor(parsed: &ParsedModule, text: &str, offset: usize) -> Located {
    let index = LineIndex::new(text);
    let collected = StyleSites::collect(parsed);

    for site in &collected.sites {
        if !contains(&site.expr, offset) {
            continue;
        }
        match &site.value {
            SiteValue::Member => {
                debug!(offset, "cursor is on an extracted style reference");
                return Located::AliasDetected;
            }
            SiteValue::Object(object) => {
                return Located::Target(make_target(
                    text,
                    &index,
                    site.attr.clone(),
                    object,
                    TargetKind::Attribute,
                ));
            }
            SiteValue::Array(objects) => {
                if let Some(object) = objects.iter().find(|object| contains(object, offset)) {
                    return Located::Target(make_target(
                        text,
                        &index,
                        object.clone(),
                        object,
                        TargetKind::ArrayElement,
                    ));
                }
            }
            SiteValue::Other => {}
        }
    }

    let mut candidates: Vec<usize> = collected
        .elements
        .iter()
        .enumerate()
        .filter(|(_, element)| contains(&element.range, offset))
        .map(|(i, _)| i)
        .collect();
    candidates.sort_by(|&a, &b| {
        let (a, b) = (&collected.elements[a], &collected.elements[b]);
        b.depth
            .cmp(&a.depth)
            .then(b.range.start.cmp(&a.range.start))
    });

    for candidate in candidates {
        let own_sites = collected
            .sites
            .iter()
            .filter(|site| site.element == Some(candidate));
        for site in own_sites {
            match &site.value {
                SiteValue::Object(object) => {
                    return Located::Target(make_target(
                        text,
                        &index,
                        site.attr.clone(),
                        object,
                        TargetKind::Attribute,
                    ));
                }
                SiteValue::Array(objects) => {
                    if let Some(object) = objects.first() {
                        return Located::Target(make_target(
                            text,
                            &index,
                            object.clone(),
                            object,
                            TargetKind::ArrayElement,
                        ));
                    }
                }
                SiteValue::Member | SiteValue::Other => {}
            }
        }
    }

    Located::NotFound
}

/// Every non-empty inline style literal in the file, in document order.
pub fn find_all(parsed: &ParsedModule, text: &str) -> Vec<StyleTarget> {
    let index = LineIndex::new(text);
    let collected = StyleSites::collect(parsed);

    let mut targets = Vec::new();
    for site in &collected.sites {
        match &site.value {
            SiteValue::Object(object) => targets.push(make_target(
                text,
                &index,
                site.attr.clone(),
                object,
                TargetKind::Attribute,
            )),
            SiteValue::Array(objects) => {
                targets.extend(objects.iter().map(|object| {
                    make_target(
                        text,
                        &index,
                        object.clone(),
                        object,
                        TargetKind::ArrayElement,
                    )
                }));
            }
            SiteValue::Member | SiteValue::Other => {}
        }
    }
    targets.retain(|target| !target.is_empty());
    targets
}
