//! Derive macro implementation used by `qdim-core`.
//!
//! `qdim-derive` is an implementation detail of this workspace. The `Dimension` derive expands in terms of
//! `<crate>::Dimension` and `<crate>::typenum`, where `<crate>` defaults to `crate` so that `qdim-core` can derive its
//! own tags. Other crates name the path they reach the engine through (`crate = "qdim"`).
//!
//! Most users should depend on `qdim` instead and use the re-exported derive.
//!
//! # Generated impls
//!
//! For a tag type `Distance`, the derive implements `<crate>::Dimension for Distance` with:
//!
//! - `type Id`: the identity as a `typenum` unsigned integer, so tags can be compared during trait resolution.
//! - `const NAME`: the human-readable name.
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute:
//!
//! - `id = 7`: identity of the tag; two tags with the same id are the same dimension
//! - `name = "distance"`: optional, defaults to the lowercased type name
//! - `crate = "qdim"`: optional path to the crate exposing `Dimension`, defaults to `crate`

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, DeriveInput, Ident, LitInt, LitStr, Path, Token,
};

/// Derive `Dimension` for a tag type.
///
/// The derive must be paired with a `#[dimension(...)]` attribute providing at least `id`.
///
/// ```ignore
/// #[derive(Dimension)]
/// #[dimension(id = 16, name = "angle", crate = "qdim")]
/// pub enum Angle {}
/// ```
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "dimension tags cannot be generic",
        ));
    }

    let attr = parse_dimension_attribute(&input.attrs)?;

    let krate = attr.krate.unwrap_or_else(|| parse_quote!(crate));
    let id = typenum_unsigned(attr.id, &krate);
    let display = match attr.name {
        Some(lit) => lit.value(),
        None => name.to_string().to_lowercase(),
    };

    let expanded = quote! {
        impl #krate::Dimension for #name {
            type Id = #id;
            const NAME: &'static str = #display;
        }
    };

    Ok(expanded)
}

/// Spells `value` as a `typenum` binary unsigned, most significant bit outermost.
fn typenum_unsigned(value: u64, krate: &Path) -> TokenStream2 {
    let mut ty = quote!(#krate::typenum::UTerm);
    if value == 0 {
        return ty;
    }
    let width = u64::BITS - value.leading_zeros();
    for shift in (0..width).rev() {
        let bit = if (value >> shift) & 1 == 1 {
            quote!(#krate::typenum::B1)
        } else {
            quote!(#krate::typenum::B0)
        };
        ty = quote!(#krate::typenum::UInt<#ty, #bit>);
    }
    ty
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    id: u64,
    name: Option<LitStr>,
    krate: Option<Path>,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut id: Option<u64> = None;
        let mut name: Option<LitStr> = None;
        let mut krate: Option<Path> = None;

        while !input.is_empty() {
            // `crate` is a keyword, so the key is read with `parse_any`.
            let key = Ident::parse_any(input)?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "id" => {
                    let lit: LitInt = input.parse()?;
                    id = Some(lit.base10_parse()?);
                }
                "name" => {
                    name = Some(input.parse()?);
                }
                "crate" => {
                    let lit: LitStr = input.parse()?;
                    krate = Some(lit.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let id =
            id.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `id`"))?;

        Ok(DimensionAttribute { id, name, krate })
    }
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_dimension_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[dimension(id = 1, name = "distance", crate = "qdim")]
            pub enum Distance {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!(attr.id, 1);
        assert_eq!(attr.name.unwrap().value(), "distance");
        assert!(attr.krate.unwrap().is_ident("qdim"));
    }

    #[test]
    fn test_parse_dimension_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Distance {}
        };

        let result = parse_dimension_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[dimension(...)] attribute"));
    }

    #[test]
    fn test_parse_dimension_attribute_missing_id() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "distance")]
            pub enum Distance {}
        };

        let result = parse_dimension_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `id`"));
    }

    #[test]
    fn test_parse_dimension_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[dimension(id = 1, symbol = "m")]
            pub enum Distance {}
        };

        let result = parse_dimension_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute `symbol`"));
    }

    #[test]
    fn test_parse_negative_id() {
        let tokens = quote! { id = -1 };
        let result: syn::Result<DimensionAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_dimension_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[dimension(id = 2, name = "duration")]
            pub enum Duration {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Dimension for Duration"));
        assert!(code.contains("const NAME : & 'static str = \"duration\""));
        assert!(code.contains(
            "type Id = crate :: typenum :: UInt < crate :: typenum :: UInt < crate :: typenum :: UTerm , crate :: typenum :: B1 > , crate :: typenum :: B0 >"
        ));
    }

    #[test]
    fn test_derive_dimension_impl_default_name() {
        let input: DeriveInput = parse_quote! {
            #[dimension(id = 16)]
            pub enum LuminousIntensity {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("\"luminousintensity\""));
    }

    #[test]
    fn test_derive_dimension_impl_crate_path() {
        let input: DeriveInput = parse_quote! {
            #[dimension(id = 16, crate = "::qdim")]
            pub enum Angle {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("impl :: qdim :: Dimension for Angle"));
        assert!(code.contains(":: qdim :: typenum :: UTerm"));
    }

    #[test]
    fn test_derive_dimension_impl_rejects_generics() {
        let input: DeriveInput = parse_quote! {
            #[dimension(id = 16)]
            pub struct Tagged<T>(T);
        };

        let err = derive_dimension_impl(input).err().unwrap();
        assert!(err.to_string().contains("cannot be generic"));
    }

    #[test]
    fn test_typenum_unsigned_bits() {
        let krate: Path = parse_quote!(t);
        assert_eq!(typenum_unsigned(0, &krate).to_string(), "t :: typenum :: UTerm");
        assert_eq!(
            typenum_unsigned(1, &krate).to_string(),
            "t :: typenum :: UInt < t :: typenum :: UTerm , t :: typenum :: B1 >"
        );
        let five = typenum_unsigned(5, &krate).to_string();
        assert_eq!(five.matches("B1").count(), 2);
        assert_eq!(five.matches("B0").count(), 1);
    }

    #[test]
    fn test_dimension_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            id = 3, name = "weight",
        };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.id, 3);
    }

    #[test]
    fn test_dimension_attribute_parse_duplicate_id() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            id = 3, id = 4
        };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.id, 4);
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<DimensionAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_dimension_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub enum Distance {}
        };
        let err = derive_dimension_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
