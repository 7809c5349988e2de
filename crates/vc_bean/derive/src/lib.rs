//! See [`Bean`](derive_bean).
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static BEAN_ATTRIBUTE_NAME: &str = "bean";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod bean;
mod manifest;

// -----------------------------------------------------------------------------
// Macros

/// # Bean Derivation
///
/// `#[derive(Bean)]` implements `Typed`, `Reflect` and `Bean` for a
/// non-generic struct with named fields. Every field becomes a readable and
/// writable property named after the field, in declaration order.
///
/// Field types must implement `Reflect` and `Typed`: primitives, `String`,
/// `Option<T>`, the standard collections and other beans.
///
/// ## Default Constructor
///
/// Absent beans can only be created on write if a constructor is registered.
/// Types implementing `Default` register it with `#[bean(default)]`.
///
/// ```rust, ignore
/// #[derive(Bean, Default)]
/// #[bean(default)]
/// struct Address {
///     city: Option<String>,
/// }
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Field Attributes
///
/// - `#[bean(skip)]`: the field is not a property.
/// - `#[bean(rename = "name")]`: the property name, instead of the field name.
/// - `#[bean(read_only)]`: the property cannot be assigned.
/// - `#[bean(write_only)]`: the property cannot be read, nor traversed.
///
/// ```rust, ignore
/// #[derive(Bean)]
/// struct Account {
///     #[bean(read_only)]
///     id: u64,
///     #[bean(rename = "displayName")]
///     display_name: String,
///     #[bean(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Markers
///
/// Any `Send + Sync + 'static` value can be attached to a property with
/// `#[bean(@Expr)]`, and queried by type from its `Markers`.
/// At most one marker of each type is stored, the last one wins.
///
/// ```rust, ignore
/// struct UpperCase;
///
/// #[derive(Bean)]
/// struct Label {
///     #[bean(@UpperCase, @0..64usize)]
///     text: String,
/// }
/// ```
#[proc_macro_derive(Bean, attributes(bean))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match bean::derive_bean(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
