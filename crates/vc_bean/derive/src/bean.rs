//! Code generation of `#[derive(Bean)]`.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Type};

use crate::attributes::{FieldAttributes, Markers, TypeAttributes};
use crate::manifest::Manifest;

/// One property of the bean.
struct Property<'a> {
    name: LitStr,
    member: &'a Ident,
    ty: &'a Type,
    readable: bool,
    writable: bool,
    markers: Markers,
}

fn collect_properties(ast: &DeriveInput) -> syn::Result<Vec<Property<'_>>> {
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new(
            ast.generics.span(),
            "`#[derive(Bean)]` does not support generic types",
        ));
    }

    let Data::Struct(DataStruct {
        fields: Fields::Named(fields),
        ..
    }) = &ast.data
    else {
        return Err(syn::Error::new(
            ast.ident.span(),
            "`#[derive(Bean)]` only supports structs with named fields",
        ));
    };

    let mut properties = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(member) = &field.ident else {
            continue;
        };
        let name = attrs
            .rename
            .unwrap_or_else(|| LitStr::new(&member.unraw().to_string(), member.span()));

        if let Some(previous) = properties
            .iter()
            .find(|p: &&Property<'_>| p.name.value() == name.value())
        {
            let mut err = syn::Error::new(name.span(), "duplicate property name");
            err.combine(syn::Error::new(previous.name.span(), "first declared here"));
            return Err(err);
        }

        properties.push(Property {
            name,
            member,
            ty: &field.ty,
            readable: !attrs.write_only,
            writable: !attrs.read_only,
            markers: attrs.markers,
        });
    }
    Ok(properties)
}

pub(crate) fn derive_bean(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let type_attributes = TypeAttributes::parse_attrs(&ast.attrs)?;
    let properties = collect_properties(ast)?;

    let vc_bean = Manifest::shared(Manifest::get_crate_path);
    let ident = &ast.ident;
    let len = properties.len();

    let reflect_ = quote! { #vc_bean::Reflect };
    let box_ = quote! { #vc_bean::__macro_exports::Box };

    // Typed

    let infos = properties.iter().enumerate().map(|(index, property)| {
        let Property {
            name,
            ty,
            readable,
            writable,
            ..
        } = property;
        let access = match readable & writable {
            true => TokenStream::new(),
            false => quote! { .with_access(#readable, #writable) },
        };
        let markers = property.markers.to_tokens_with(&vc_bean);
        quote! {
            #vc_bean::info::PropertyInfo::new::<#ty>(#name, #index) #access #markers
        }
    });

    let constructor = type_attributes.default.map(|span| {
        quote_spanned! { span=>
            .with_constructor(#vc_bean::info::default_of::<Self>)
        }
    });

    let impl_typed = quote! {
        impl #vc_bean::info::Typed for #ident {
            fn type_info() -> &'static #vc_bean::info::TypeInfo {
                static CELL: #vc_bean::impls::NonGenericTypeInfoCell =
                    #vc_bean::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    let properties: [#vc_bean::info::PropertyInfo; #len] = [#(#infos),*];
                    #vc_bean::info::TypeInfo::Bean(
                        #vc_bean::info::BeanInfo::new::<Self>(properties) #constructor
                    )
                })
            }
        }
    };

    // Reflect

    let impl_reflect = quote! {
        impl #reflect_ for #ident {
            fn set(
                &mut self,
                value: #box_<dyn #reflect_>,
            ) -> ::core::result::Result<(), #box_<dyn #reflect_>> {
                *self = <Self as #vc_bean::info::Typed>::take_from(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #vc_bean::info::ReflectKind {
                #vc_bean::info::ReflectKind::Bean
            }

            #[inline]
            fn reflect_ref(&self) -> #vc_bean::ops::ReflectRef<'_> {
                #vc_bean::ops::ReflectRef::Bean(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #vc_bean::ops::ReflectMut<'_> {
                #vc_bean::ops::ReflectMut::Bean(self)
            }
        }
    };

    // Bean

    let members: Vec<_> = properties.iter().map(|property| property.member).collect();
    let indices = 0..len;
    let indices_mut = 0..len;

    let impl_bean = quote! {
        impl #vc_bean::ops::Bean for #ident {
            fn property_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(#reflect_::as_reflect(&self.#members)),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn property_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#indices_mut => ::core::option::Option::Some(#reflect_::as_reflect_mut(&mut self.#members)),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn property_len(&self) -> usize {
                #len
            }
        }
    };

    Ok(quote! {
        #impl_typed
        #impl_reflect
        #impl_bean
    })
}
