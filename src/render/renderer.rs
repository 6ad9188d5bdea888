//! The resolver: walks a specification and builds the component tree.
//!
//! Each node is rendered inside its own boundary. Malformed nodes, unknown
//! types and failing factories are replaced by a [`Placeholder`] and reported
//! as a [`Diagnostic`]; siblings and ancestors render normally.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, error, warn};

use super::config::RenderConfig;
use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::source::{ExpandedChildren, Source};
use super::{markup, outline};
use crate::action::{self, HandlerTable};
use crate::component::{Placeholder, PlaceholderReason, Props};
use crate::registry::{self, FactoryContext, FactoryError, Registry};
use crate::spec::parse::check_version;
use crate::spec::{SpecDocument, SpecError, SpecErrorKind, SpecNode, SpecPath, SpecWarning};
use crate::tree::{ChildSlot, NodeId, RenderNode, RenderTree};

// ---------------------------------------------------------------------------
// RenderOutput
// ---------------------------------------------------------------------------

/// Result of one render pass.
///
/// Rendering never fails as a whole: the tree always has a root, and every
/// problem is recorded in `diagnostics`.
#[derive(Debug)]
pub struct RenderOutput {
    pub tree: RenderTree,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderOutput {
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    pub fn root_node(&self) -> Option<&RenderNode> {
        self.tree.root_node()
    }

    /// Whether any node was replaced by a placeholder.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    /// See [`outline`](super::outline).
    pub fn outline(&self) -> String {
        outline(&self.tree)
    }

    /// See [`markup`](super::markup).
    pub fn markup(&self) -> String {
        markup(&self.tree)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders specifications against a borrowed registry.
///
/// The registry is only read; render passes may run concurrently from
/// several threads sharing one registry.
#[derive(Debug, Clone)]
pub struct Renderer<'r> {
    registry: &'r Registry,
    config: RenderConfig,
}

impl<'r> Renderer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            config: RenderConfig::default(),
        }
    }

    /// Replace the configuration (builder).
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Render a typed specification tree.
    pub fn render(&self, spec: &SpecNode, handlers: &HandlerTable) -> RenderOutput {
        self.run(Source::Typed(spec), handlers, None)
    }

    /// Render a document, reporting an unsupported version as a warning.
    pub fn render_document(&self, document: &SpecDocument, handlers: &HandlerTable) -> RenderOutput {
        self.run(
            Source::Typed(&document.root),
            handlers,
            document.version_warning(),
        )
    }

    /// Render raw JSON, parsing each node as it is reached.
    ///
    /// Unlike [`SpecNode::from_value`], a malformed node here only replaces
    /// its own subtree with a placeholder.
    pub fn render_value(&self, value: &Value, handlers: &HandlerTable) -> RenderOutput {
        let version = value.as_object().and_then(|object| object.get("version"));
        self.run(Source::Raw(value), handlers, check_version(version))
    }

    fn run(
        &self,
        source: Source<'_>,
        handlers: &HandlerTable,
        version: Option<SpecWarning>,
    ) -> RenderOutput {
        let mut pass = Pass {
            registry: self.registry,
            config: &self.config,
            handlers,
            tree: RenderTree::new(),
            diagnostics: Vec::new(),
        };
        if let Some(warning) = version {
            pass.spec_warning(warning);
        }
        let root = pass.node(source, SpecPath::root());
        pass.tree.set_root(root);

        let errors = pass.diagnostics.iter().filter(|d| d.is_error()).count();
        debug!(
            nodes = pass.tree.len(),
            errors,
            warnings = pass.diagnostics.len() - errors,
            "render pass complete"
        );
        RenderOutput {
            tree: pass.tree,
            diagnostics: pass.diagnostics,
        }
    }
}

/// Render a specification with the process-wide registry and default config.
pub fn render(spec: &SpecNode, handlers: &HandlerTable) -> RenderOutput {
    Renderer::new(registry::global()).render(spec, handlers)
}

// ---------------------------------------------------------------------------
// Render pass
// ---------------------------------------------------------------------------

struct Pass<'p> {
    registry: &'p Registry,
    config: &'p RenderConfig,
    handlers: &'p HandlerTable,
    tree: RenderTree,
    diagnostics: Vec<Diagnostic>,
}

impl Pass<'_> {
    /// Render one node and its subtree. Always yields a node.
    fn node(&mut self, source: Source<'_>, path: SpecPath) -> NodeId {
        if path.depth() > self.config.max_depth {
            let err = SpecError::new(
                SpecErrorKind::TooDeep {
                    limit: self.config.max_depth,
                },
                path.clone(),
            );
            return self.malformed(source.declared_type(), path, err);
        }

        let expanded = match source.expand(&path) {
            Ok(expanded) => expanded,
            Err(err) => return self.malformed(source.declared_type(), path, err),
        };
        for warning in expanded.warnings {
            self.spec_warning(warning);
        }
        let kind = expanded.kind;

        let registry = self.registry;
        let Some(entry) = registry.resolve(kind) else {
            warn!(component = kind, path = %path, "unknown component type");
            let message = format!("no component registered for type `{kind}`");
            return self.placeholder(
                PlaceholderReason::UnknownComponent,
                Some(kind),
                path,
                message,
                DiagnosticKind::UnknownComponentType,
            );
        };

        let mut properties = expanded.properties;
        if self.config.sanitize_props && properties.keys().any(|name| !entry.accepts(name)) {
            let owned = properties.to_mut();
            let dropped: Vec<String> = owned
                .keys()
                .filter(|name| !entry.accepts(name))
                .cloned()
                .collect();
            owned.retain(|name, _| entry.accepts(name));
            debug!(component = kind, path = %path, ?dropped, "dropped unaccepted properties");
        }

        let props = self.bind(&properties, kind, &path);

        let children = match expanded.children {
            ExpandedChildren::Absent => ChildSlot::Absent,
            ExpandedChildren::Text(text) => ChildSlot::Text(text.into_owned()),
            ExpandedChildren::Single(child) => ChildSlot::Single(self.node(child, path.child())),
            ExpandedChildren::Many(items) => ChildSlot::Many(
                items
                    .into_iter()
                    .map(|(index, child)| self.node(child, path.child_at(index)))
                    .collect(),
            ),
        };

        let ctx = FactoryContext {
            kind,
            props: &props,
            children: &children,
            path: &path,
        };
        let created = panic::catch_unwind(AssertUnwindSafe(|| entry.factory().create(&ctx)))
            .unwrap_or_else(|payload| Err(FactoryError::Custom(panic_message(payload.as_ref()))));

        match created {
            Ok(component) => self
                .tree
                .insert(RenderNode::new(component, props, path).with_children(children)),
            Err(err) => {
                error!(component = kind, path = %path, error = %err, "component factory failed");
                for &child in children.ids() {
                    self.tree.remove(child);
                }
                self.placeholder(
                    PlaceholderReason::FactoryFailed,
                    Some(kind),
                    path,
                    err.to_string(),
                    DiagnosticKind::FactoryError,
                )
            }
        }
    }

    /// Bind handlers, or forward properties untouched when binding is off.
    fn bind(&mut self, properties: &crate::spec::Properties, kind: &str, path: &SpecPath) -> Props {
        if !self.config.bind_actions {
            return action::passthrough(properties, path);
        }
        let binding = action::bind(properties, self.handlers, path);
        for unresolved in binding.unresolved {
            if self.config.warn_unresolved_handlers {
                warn!(
                    component = kind,
                    path = %path,
                    prop = %unresolved.prop,
                    action = %unresolved.action,
                    "unresolved handler reference; bound a no-op"
                );
            } else {
                debug!(
                    component = kind,
                    path = %path,
                    prop = %unresolved.prop,
                    action = %unresolved.action,
                    "unresolved handler reference; bound a no-op"
                );
            }
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnresolvedHandlerReference,
                path.clone(),
                format!(
                    "`{}` refers to unknown action `{}`",
                    unresolved.prop, unresolved.action
                ),
            ));
        }
        binding.props
    }

    fn malformed(&mut self, declared: Option<&str>, path: SpecPath, err: SpecError) -> NodeId {
        warn!(path = %err.path, error = %err.kind, "malformed specification node");
        let message = err.kind.to_string();
        self.diagnostics.push(Diagnostic::new(
            DiagnosticKind::MalformedNode,
            err.path,
            message.clone(),
        ));
        self.insert_placeholder(Placeholder::new(
            PlaceholderReason::MalformedNode,
            declared.map(str::to_owned),
            path,
            message,
        ))
    }

    fn placeholder(
        &mut self,
        reason: PlaceholderReason,
        declared: Option<&str>,
        path: SpecPath,
        message: String,
        kind: DiagnosticKind,
    ) -> NodeId {
        self.diagnostics
            .push(Diagnostic::new(kind, path.clone(), message.clone()));
        self.insert_placeholder(Placeholder::new(
            reason,
            declared.map(str::to_owned),
            path,
            message,
        ))
    }

    fn insert_placeholder(&mut self, placeholder: Placeholder) -> NodeId {
        let path = placeholder.path.clone();
        self.tree
            .insert(RenderNode::new(Box::new(placeholder), Props::new(), path))
    }

    fn spec_warning(&mut self, warning: SpecWarning) {
        debug!(path = %warning.path, warning = %warning.kind, "specification warning");
        self.diagnostics.push(Diagnostic::new(
            DiagnosticKind::SpecWarning,
            warning.path,
            warning.kind.to_string(),
        ));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    };
    format!("factory panicked: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, Element, PropValue};
    use crate::components::{Alert, AlertVariant};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn builtins() -> Registry {
        Registry::with_builtins()
    }

    fn render_json(registry: &Registry, value: Value) -> RenderOutput {
        Renderer::new(registry).render_value(&value, &HandlerTable::new())
    }

    fn root(output: &RenderOutput) -> &RenderNode {
        output.root_node().expect("root")
    }

    // ── Resolution ───────────────────────────────────────────────────

    #[test]
    fn renders_alert_scenario() {
        let registry = builtins();
        let output = render_json(
            &registry,
            json!({
                "type": "Alert",
                "variant": "destructive",
                "children": [
                    { "type": "AlertTitle", "children": "Error" },
                    { "type": "AlertDescription", "children": "Session expired." }
                ]
            }),
        );
        assert!(output.diagnostics.is_empty());
        let alert = root(&output);
        assert_eq!(alert.downcast::<Alert>().unwrap().variant, AlertVariant::Destructive);
        let children = alert.children.ids();
        assert_eq!(children.len(), 2);
        let title = output.tree.get(children[0]).unwrap();
        assert_eq!(title.component_type(), "AlertTitle");
        assert_eq!(title.children.text(), Some("Error"));
        assert_eq!(title.path.to_strings(), vec!["root", "children", "0"]);
    }

    #[test]
    fn unknown_root_becomes_placeholder() {
        let output = render_json(&builtins(), json!({ "type": "Frobnicator", "children": "x" }));
        assert_eq!(output.tree.len(), 1);
        let node = root(&output);
        let placeholder = node.placeholder().unwrap();
        assert_eq!(placeholder.reason, PlaceholderReason::UnknownComponent);
        assert_eq!(placeholder.type_name.as_deref(), Some("Frobnicator"));
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::UnknownComponentType);
        assert_eq!(output.diagnostics[0].path.to_strings(), vec!["root"]);
    }

    #[test]
    fn unknown_child_is_contained() {
        let output = render_json(
            &builtins(),
            json!({
                "type": "Stack",
                "children": [
                    { "type": "Text", "children": "a" },
                    { "type": "Nope", "children": [ { "type": "Text" } ] },
                    { "type": "Text", "children": "c" }
                ]
            }),
        );
        let ids = root(&output).children.ids().to_vec();
        assert_eq!(ids.len(), 3);
        assert_eq!(output.tree.get(ids[0]).unwrap().component_type(), "Text");
        assert!(output.tree.get(ids[1]).unwrap().is_placeholder());
        assert!(output.tree.get(ids[1]).unwrap().children.is_absent());
        assert_eq!(output.tree.get(ids[2]).unwrap().children.text(), Some("c"));
        assert_eq!(output.tree.len(), 4);
        assert_eq!(output.errors().count(), 1);
    }

    // ── Malformed input ──────────────────────────────────────────────

    #[test]
    fn malformed_child_is_contained() {
        let output = render_json(
            &builtins(),
            json!({
                "type": "Card",
                "children": [
                    { "type": "CardHeader" },
                    { "type": "CardContent", "children": 42 },
                    { "children": "no type" }
                ]
            }),
        );
        let ids = root(&output).children.ids().to_vec();
        assert_eq!(ids.len(), 3);
        let bad_children = output.tree.get(ids[1]).unwrap();
        assert_eq!(bad_children.placeholder_reason(), Some(PlaceholderReason::MalformedNode));
        assert_eq!(
            bad_children.placeholder().unwrap().type_name.as_deref(),
            Some("CardContent")
        );
        let no_type = output.tree.get(ids[2]).unwrap();
        assert_eq!(no_type.placeholder().unwrap().type_name, None);
        assert_eq!(
            output
                .errors()
                .map(|d| d.kind)
                .collect::<Vec<_>>(),
            vec![DiagnosticKind::MalformedNode, DiagnosticKind::MalformedNode]
        );
    }

    #[test]
    fn non_object_root_is_a_placeholder() {
        let output = render_json(&builtins(), json!([1, 2]));
        assert_eq!(root(&output).placeholder_reason(), Some(PlaceholderReason::MalformedNode));
        assert_eq!(output.tree.len(), 1);
    }

    #[test]
    fn depth_limit() {
        let mut spec = SpecNode::new("Text");
        for _ in 0..5 {
            spec = SpecNode::new("Stack").with_child(spec);
        }
        let registry = builtins();
        let renderer = Renderer::new(&registry).with_config(RenderConfig::new().with_max_depth(3));
        let output = renderer.render(&spec, &HandlerTable::new());
        let placeholders = output.tree.placeholders();
        assert_eq!(placeholders.len(), 1);
        let deep = output.tree.get(placeholders[0]).unwrap();
        assert_eq!(deep.path.depth(), 4);
        assert!(output.diagnostics[0].message.contains("depth limit of 3"));
    }

    #[test]
    fn warnings_are_recorded() {
        let output = render_json(
            &builtins(),
            json!({
                "type": "Stack",
                "version": 2,
                "children": [ "stray", { "type": "Text" } ]
            }),
        );
        assert!(!output.has_errors());
        let kinds: Vec<_> = output.warnings().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DiagnosticKind::SpecWarning, DiagnosticKind::SpecWarning]);
        assert_eq!(root(&output).children.ids().len(), 1);
        let text = output.tree.get(root(&output).children.ids()[0]).unwrap();
        assert_eq!(text.path.to_strings(), vec!["root", "children", "1"]);
    }

    // ── Factories ────────────────────────────────────────────────────

    #[test]
    fn factory_error_becomes_placeholder_and_drops_children() {
        let output = render_json(
            &builtins(),
            json!({
                "type": "Stack",
                "children": [
                    { "type": "Alert", "variant": "neon", "children": [ { "type": "AlertTitle" } ] },
                    { "type": "Badge", "children": "ok" }
                ]
            }),
        );
        let ids = root(&output).children.ids().to_vec();
        let failed = output.tree.get(ids[0]).unwrap();
        assert_eq!(failed.placeholder_reason(), Some(PlaceholderReason::FactoryFailed));
        assert!(failed.children.is_absent());
        assert_eq!(output.tree.len(), 3);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::FactoryError);
        assert!(output.diagnostics[0].message.contains("variant"));
    }

    #[test]
    fn factory_panic_is_contained() {
        let mut registry = builtins();
        registry
            .register(
                "Exploder",
                |_: &FactoryContext<'_>| -> Result<Box<dyn Component>, FactoryError> {
                    panic!("boom")
                },
                None,
            )
            .unwrap();
        let output = render_json(
            &registry,
            json!({ "type": "Stack", "children": [ { "type": "Exploder" }, { "type": "Text" } ] }),
        );
        let ids = root(&output).children.ids().to_vec();
        assert_eq!(
            output.tree.get(ids[0]).unwrap().placeholder_reason(),
            Some(PlaceholderReason::FactoryFailed)
        );
        assert_eq!(output.tree.get(ids[1]).unwrap().component_type(), "Text");
        assert_eq!(output.diagnostics[0].message, "factory panicked: boom");
    }

    #[test]
    fn custom_factory_sees_rendered_children() {
        let mut registry = Registry::new();
        registry.register_element("Row", "div", None).unwrap();
        registry
            .register(
                "Counted",
                |ctx: &FactoryContext<'_>| -> Result<Box<dyn Component>, FactoryError> {
                    let count = ctx.children.count().unwrap_or(0);
                    Ok(Box::new(Element::new(format!("Counted{count}"), "ul")))
                },
                None,
            )
            .unwrap();
        let output = render_json(
            &registry,
            json!({ "type": "Counted", "children": [ { "type": "Row" }, { "type": "Row" } ] }),
        );
        assert_eq!(root(&output).component_type(), "Counted2");
    }

    // ── Properties and handlers ──────────────────────────────────────

    #[test]
    fn sanitizes_against_allow_list() {
        let output = render_json(
            &builtins(),
            json!({ "type": "Alert", "variant": "default", "className": "mt-4", "onHover": "x" }),
        );
        let props = &root(&output).props;
        assert_eq!(props.names().collect::<Vec<_>>(), vec!["variant", "className"]);
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn sanitize_disabled_forwards_everything() {
        let registry = builtins();
        let renderer =
            Renderer::new(&registry).with_config(RenderConfig::new().with_sanitize_props(false));
        let output = renderer.render_value(
            &json!({ "type": "Badge", "data-test": "x" }),
            &HandlerTable::new(),
        );
        assert!(root(&output).props.contains("data-test"));
    }

    #[test]
    fn binds_registered_handlers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let handlers = HandlerTable::new().with("save", move |event| {
            assert_eq!(event.path.to_strings(), vec!["root"]);
            seen.fetch_add(1, Ordering::SeqCst);
        });
        let registry = builtins();
        let output = Renderer::new(&registry)
            .render_value(&json!({ "type": "Button", "onClick": "save" }), &handlers);
        let button = root(&output).downcast::<crate::components::Button>().unwrap();
        button.click();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn unresolved_handler_is_noop_with_warning() {
        let output = render_json(&builtins(), json!({ "type": "Button", "onClick": "missing" }));
        let handler = root(&output).props.handler("onClick").unwrap().unwrap();
        assert!(handler.is_noop());
        assert!(!output.has_errors());
        assert_eq!(
            output.diagnostics[0].kind,
            DiagnosticKind::UnresolvedHandlerReference
        );
    }

    #[test]
    fn binding_disabled_binds_noops() {
        let registry = builtins();
        let config = RenderConfig::new()
            .with_bind_actions(false)
            .with_sanitize_props(false);
        let renderer = Renderer::new(&registry).with_config(config);
        let handlers = HandlerTable::new().with("save", |_| {});
        let output = renderer.render_value(
            &json!({ "type": "Badge", "onClick": "save", "variant": "save" }),
            &handlers,
        );
        let node = root(&output);
        let handler = node.props.get("onClick").unwrap().as_handler().unwrap();
        assert!(handler.is_noop());
        handler.invoke(Value::Null);
        assert_eq!(node.props.get("variant"), Some(&PropValue::Value(json!("save"))));
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn binding_disabled_button_still_renders() {
        let registry = builtins();
        let renderer = Renderer::new(&registry).with_config(RenderConfig::new().with_bind_actions(false));
        let output = renderer.render_value(
            &json!({ "type": "Button", "onClick": "save", "children": "Save" }),
            &HandlerTable::new(),
        );
        let node = root(&output);
        assert!(node.placeholder().is_none());
        assert_eq!(node.component_type(), "Button");
        assert!(output.diagnostics.is_empty());
    }

    // ── Shape ────────────────────────────────────────────────────────

    #[test]
    fn empty_and_absent_children_differ() {
        let registry = builtins();
        let renderer = Renderer::new(&registry);
        let empty = renderer.render(&SpecNode::new("Stack").with_children([]), &HandlerTable::new());
        let absent = renderer.render(&SpecNode::new("Stack"), &HandlerTable::new());
        assert_eq!(root(&empty).children.count(), Some(0));
        assert_eq!(root(&absent).children.count(), None);
    }

    #[test]
    fn single_child_is_not_wrapped() {
        let registry = builtins();
        let output = Renderer::new(&registry).render(
            &SpecNode::new("Card").with_child(SpecNode::new("CardContent")),
            &HandlerTable::new(),
        );
        assert!(matches!(root(&output).children, ChildSlot::Single(_)));
    }

    #[test]
    fn render_document_reports_version() {
        let registry = builtins();
        let document = SpecDocument {
            version: Some(json!(9)),
            root: SpecNode::new("Text"),
        };
        let output = Renderer::new(&registry).render_document(&document, &HandlerTable::new());
        assert_eq!(output.warnings().count(), 1);
    }

    #[test]
    fn module_render_uses_global_registry() {
        let output = render(&SpecNode::new("Badge").with_text("New"), &HandlerTable::new());
        assert_eq!(root(&output).component_type(), "Badge");
    }
}
