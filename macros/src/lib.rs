//! Proc macros for jedi-spec: the `spec!` RSX builder for specification trees.
//!
//! This crate is not meant to be used directly; enable the `macros` feature on `jedi-spec`.

use proc_macro::TokenStream;

mod spec_macro;

/// RSX-style specification macro.
///
/// Expands JSX-like syntax into a `jedi_spec::spec::SpecNode` built with the
/// node builder API.
///
/// # Syntax
///
/// - `<Type />`: no children (absent)
/// - `<Type></Type>`: an explicitly empty child list
/// - `<Type>"text"</Type>`: literal text content
/// - `<Type> <Child /> </Type>`: one child node; several children become a list
///
/// # Attributes
///
/// Each attribute becomes a property, in source order. Values are string,
/// number or boolean literals, or `{expr}` for anything convertible into
/// `serde_json::Value`. Names may be keywords (`type`) or dashed (`data-test`).
///
/// Mismatched closing tags and text mixed with child elements are compile
/// errors.
///
/// # Example
///
/// ```ignore
/// let node = spec! {
///     <Alert variant="destructive">
///         <AlertTitle>"Error"</AlertTitle>
///         <AlertDescription>"Session expired."</AlertDescription>
///     </Alert>
/// };
/// ```
#[proc_macro]
pub fn spec(input: TokenStream) -> TokenStream {
    spec_macro::spec_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
