//! RSX spec! macro: parse JSX-like syntax and generate `SpecNode` builder code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Error, Expr, Ident, Lit, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// Right-hand side of an attribute.
#[derive(Clone)]
pub(crate) enum AttrValue {
    /// `name="text"`, `name=4`, `name=true`
    Lit(Lit),
    /// `name={expr}`
    Expr(Expr),
}

/// A parsed RSX attribute: `name=value`.
#[derive(Clone)]
pub(crate) struct Attribute {
    /// Property key; may contain dashes (`data-test`) or be a keyword (`type`).
    pub name: String,
    pub span: Span,
    pub value: AttrValue,
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attribute").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Children written between the open and close tags.
#[derive(Clone)]
pub(crate) enum Content {
    /// `<Tag />`
    Absent,
    /// `<Tag>"text"</Tag>`
    Text(LitStr),
    /// `<Tag></Tag>` or nested elements.
    Nodes(Vec<Element>),
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Absent => f.write_str("Absent"),
            Content::Text(text) => f.debug_tuple("Text").field(&text.value()).finish(),
            Content::Nodes(nodes) => f.debug_tuple("Nodes").field(nodes).finish(),
        }
    }
}

/// A parsed RSX element: `<Tag attrs... />` or `<Tag attrs...> children </Tag>`.
#[derive(Clone)]
pub(crate) struct Element {
    pub tag: Ident,
    pub attrs: Vec<Attribute>,
    pub content: Content,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag.to_string())
            .field("attrs", &self.attrs)
            .field("content", &self.content)
            .finish()
    }
}

/// The spec! input: exactly one root element.
#[derive(Debug)]
struct SpecInput {
    root: Element,
}

/// Keys that describe the node itself rather than a property.
const RESERVED_ATTRS: &[&str] = &["children", "properties"];

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for SpecInput {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::new(Span::call_site(), "spec! macro requires a root element"));
        }
        let root = parse_element(input)?;
        if !input.is_empty() {
            return Err(input.error("spec! macro takes exactly one root element"));
        }
        Ok(SpecInput { root })
    }
}

/// Parse an attribute name: an identifier (keywords allowed) with optional
/// dash-separated segments.
fn parse_attr_name(input: ParseStream) -> Result<(String, Span)> {
    let first = Ident::parse_any(input)?;
    let span = first.span();
    let mut name = first.to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let segment = Ident::parse_any(input)?;
        name.push('-');
        name.push_str(&segment.to_string());
    }
    Ok((name, span))
}

fn parse_attr_value(input: ParseStream) -> Result<AttrValue> {
    if input.peek(syn::token::Brace) {
        let inner;
        braced!(inner in input);
        return Ok(AttrValue::Expr(inner.parse()?));
    }
    let lit: Lit = input.parse()?;
    match &lit {
        Lit::Str(_) | Lit::Int(_) | Lit::Float(_) | Lit::Bool(_) => Ok(AttrValue::Lit(lit)),
        other => Err(Error::new(
            other.span(),
            "attribute values must be string, number or boolean literals, or `{expr}`",
        )),
    }
}

/// Parse a single RSX element from the token stream.
pub(crate) fn parse_element(input: ParseStream) -> Result<Element> {
    input.parse::<Token![<]>()?;
    let tag: Ident = input.parse()?;

    // Attributes until `/>` or `>`.
    let mut attrs = Vec::new();
    loop {
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Element {
                tag,
                attrs,
                content: Content::Absent,
            });
        }

        if input.peek(Token![>]) {
            input.parse::<Token![>]>()?;
            break;
        }

        let (name, span) = parse_attr_name(input)?;
        if RESERVED_ATTRS.contains(&name.as_str()) {
            return Err(Error::new(
                span,
                format!("`{name}` cannot be set as an attribute; write children between the tags"),
            ));
        }
        if attrs.iter().any(|a: &Attribute| a.name == name) {
            return Err(Error::new(span, format!("duplicate attribute `{name}`")));
        }
        input.parse::<Token![=]>()?;
        let value = parse_attr_value(input)?;
        attrs.push(Attribute { name, span, value });
    }

    // Children until `</Tag>`.
    let mut texts: Vec<LitStr> = Vec::new();
    let mut nodes = Vec::new();
    loop {
        if input.peek(Token![<]) && input.peek2(Token![/]) {
            input.parse::<Token![<]>()?;
            input.parse::<Token![/]>()?;
            let closing_tag: Ident = input.parse()?;
            if closing_tag != tag {
                return Err(Error::new(
                    closing_tag.span(),
                    format!(
                        "mismatched closing tag: expected `</{}>`, found `</{}>`",
                        tag, closing_tag
                    ),
                ));
            }
            input.parse::<Token![>]>()?;
            break;
        }

        if input.peek(Token![<]) {
            nodes.push(parse_element(input)?);
        } else if input.peek(LitStr) {
            texts.push(input.parse()?);
        } else {
            return Err(input.error(
                "expected a child element, a string literal or `</` to close the parent",
            ));
        }
    }

    let content = match (texts.len(), nodes.is_empty()) {
        (0, _) => Content::Nodes(nodes),
        (1, true) => Content::Text(texts.remove(0)),
        (_, true) => {
            return Err(Error::new(
                texts[1].span(),
                "an element takes at most one string literal as its text",
            ))
        }
        (_, false) => {
            return Err(Error::new(
                texts[0].span(),
                "text and child elements cannot be mixed; wrap the text in an element",
            ))
        }
    };

    Ok(Element {
        tag,
        attrs,
        content,
    })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate the builder expression for one element.
fn generate_element(elem: &Element) -> TokenStream {
    let kind = LitStr::new(&elem.tag.to_string(), elem.tag.span());

    let mut builder_calls = Vec::new();
    for attr in &elem.attrs {
        let name = LitStr::new(&attr.name, attr.span);
        let value = match &attr.value {
            AttrValue::Lit(lit) => quote! { #lit },
            AttrValue::Expr(expr) => quote! { #expr },
        };
        builder_calls.push(quote! { .with_prop(#name, #value) });
    }

    match &elem.content {
        Content::Absent => {}
        Content::Text(text) => builder_calls.push(quote! { .with_text(#text) }),
        Content::Nodes(nodes) if nodes.is_empty() => builder_calls.push(quote! {
            .with_children(::std::vec::Vec::<::jedi_spec::spec::SpecNode>::new())
        }),
        Content::Nodes(nodes) if nodes.len() == 1 => {
            let child = generate_element(&nodes[0]);
            builder_calls.push(quote! { .with_child(#child) });
        }
        Content::Nodes(nodes) => {
            let children: Vec<TokenStream> = nodes.iter().map(generate_element).collect();
            builder_calls.push(quote! { .with_children([#(#children),*]) });
        }
    }

    quote! {
        ::jedi_spec::spec::SpecNode::new(#kind) #(#builder_calls)*
    }
}

/// Entry point: generate code for the whole spec! macro.
pub(crate) fn spec_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: SpecInput = syn::parse2(input)?;
    Ok(generate_element(&parsed.root))
}

// ===========================================================================
// Tests
// ===========================================================================
