//! Parsing of `#[bean(...)]` attributes.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::ParseStream;
use syn::{Attribute, Expr, Ident, LitStr, Path, Token};

use crate::BEAN_ATTRIBUTE_NAME;

/// Calls `parse_item` for every comma separated item of every `#[bean(...)]`.
fn parse_bean_attrs(
    attrs: &[Attribute],
    mut parse_item: impl FnMut(ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if !attr.path().is_ident(BEAN_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_args_with(|input: ParseStream| {
            while !input.is_empty() {
                parse_item(input)?;
                if input.is_empty() {
                    break;
                }
                input.parse::<Token![,]>()?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Markers

/// The marker expressions of a property, `#[bean(@Expr)]`.
///
/// This corresponds to `vc_bean::info::Markers`.
#[derive(Default)]
pub(crate) struct Markers {
    values: Vec<Expr>,
}

impl Markers {
    /// Parse `@` attribute.
    ///
    /// Examples:
    /// - `#[bean(@UpperCase)]`
    /// - `#[bean(@Range(0..10))]`
    /// - `#[bean(@0.5f32)]`
    fn parse_inner_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        input.parse::<Token![@]>()?;
        self.values.push(input.parse()?);
        Ok(())
    }

    /// Returns `.with_markers(...)`, or nothing if there is no marker.
    pub fn to_tokens_with(&self, vc_bean_path: &Path) -> TokenStream {
        if self.values.is_empty() {
            return TokenStream::new();
        }

        let capacity = self.values.len();
        let values = &self.values;

        quote! {
            .with_markers(
                #vc_bean_path::info::Markers::with_capacity(#capacity)
                    #(.with_marker(#values))*
            )
        }
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[bean(default)]`: the type implements `Default`.
    pub default: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        parse_bean_attrs(attrs, |input| {
            if input.peek(Token![@]) {
                return Err(input.error("markers can only be attached to fields"));
            }
            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "default" => this.default = Some(ident.span()),
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown type attribute `{ident}`, expected `default`"),
                    ));
                }
            }
            Ok(())
        })?;
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field level attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[bean(skip)]`: the field is not a property.
    pub skip: bool,
    /// `#[bean(rename = "name")]`: the property name.
    pub rename: Option<LitStr>,
    /// `#[bean(read_only)]`
    pub read_only: bool,
    /// `#[bean(write_only)]`
    pub write_only: bool,
    pub markers: Markers,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        let mut access: Option<Ident> = None;

        parse_bean_attrs(attrs, |input| {
            if input.peek(Token![@]) {
                return this.markers.parse_inner_stream(input);
            }
            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "skip" => this.skip = true,
                "rename" => {
                    input.parse::<Token![=]>()?;
                    this.rename = Some(input.parse()?);
                }
                "read_only" | "write_only" => {
                    if let Some(previous) = &access
                        && previous != &ident
                    {
                        return Err(syn::Error::new(
                            ident.span(),
                            "`read_only` and `write_only` cannot be combined",
                        ));
                    }
                    this.read_only |= ident == "read_only";
                    this.write_only |= ident == "write_only";
                    access = Some(ident);
                }
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown field attribute `{ident}`, expected one of \
                             `skip`, `rename`, `read_only`, `write_only` or `@marker`"
                        ),
                    ));
                }
            }
            Ok(())
        })?;
        Ok(this)
    }
}
