use concat_string::concat_string;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Error, Ident, parse_str};

#[derive(Debug, deluxe::ExtractAttributes)]
#[deluxe(attributes(endpoint))]
struct Endpoint {
    path: String,
    #[deluxe(default = format_ident!("Response"))]
    response: Ident,
}

#[derive(Debug, deluxe::ParseMetaItem)]
struct Derive {
    #[deluxe(default = true)]
    debug: bool,
    #[deluxe(default = false)]
    fake: bool,
    #[deluxe(default = false)]
    endpoint: bool,
}

pub fn derive_endpoint(item: TokenStream) -> Result<TokenStream, Error> {
    let mut input: syn::DeriveInput = syn::parse2(item)?;
    let Endpoint { path, response } = deluxe::extract_attributes(&mut input)?;

    let ident = &input.ident;
    if ident != "Request" {
        return Err(syn::Error::new(
            ident.span(),
            "Struct derived with `Endpoint` should be named `Request`",
        ));
    }

    let url = concat_string!("/api/", path.trim_matches('/'));

    Ok(quote! {
        impl crate::common::JsonURL for #ident {
            const URL_JSON: &'static str = #url;
        }

        impl crate::common::JsonEndpoint for #ident {
            type Response = #response;
        }
    })
}

pub fn derive(args: TokenStream, item: TokenStream) -> Result<TokenStream, Error> {
    let args: Derive = deluxe::parse2(args)?;
    let input: syn::Item = syn::parse2(item)?;
    if !matches!(input, syn::Item::Struct(_) | syn::Item::Enum(_)) {
        return Err(syn::Error::new_spanned(input, "`api_derive` only supports struct and enum"));
    }

    let mut derives: Vec<syn::Path> =
        vec![parse_str("serde::Serialize")?, parse_str("serde::Deserialize")?];
    if args.debug {
        derives.push(parse_str("Debug")?);
    }
    if args.endpoint {
        derives.push(parse_str("crm_proc_macro::Endpoint")?);
    }

    let fake = if args.fake {
        quote! { #[cfg_attr(any(test, feature = "test"), derive(fake::Dummy))] }
    } else {
        quote! {}
    };

    Ok(quote! {
        #[derive(#(#derives),*)]
        #fake
        #input
    })
}
