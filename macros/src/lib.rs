//! This is a proc-macro helper library. Don't use this library directly; use `swizzle-vec` instead.

#![allow(missing_docs, reason = "not intended to be used directly")]

use std::error::Error;
use std::fmt;

use proc_macro2::Span;
use syn::parse::{Parse, ParseStream, Parser as _};
use syn::punctuated::Punctuated;

use swizzle_vec_gen::{Alphabet, Config, ScalarKind, Writer};

/// Generates vector types for each listed scalar type.
#[proc_macro]
pub fn vectors(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match vectors_impl(input.into()) {
        Ok(expansion) => expansion.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Generates only the swizzle accessor traits.
#[proc_macro]
pub fn swizzle_traits(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match swizzle_traits_impl(input.into()) {
        Ok(expansion) => expansion.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

// -------------------------------------------------------------------------------------------------

fn vectors_impl(input: proc_macro2::TokenStream) -> Result<proc_macro2::TokenStream, syn::Error> {
    let items = Punctuated::<MacroItem, syn::Token![,]>::parse_terminated.parse2(input)?;
    let (config, scalars) = interpret(items, true)?;
    if scalars.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "expected at least one scalar type, such as `f32`",
        ));
    }

    let source = swizzle_vec_gen::write_string(&scalars, config).map_err(|error| {
        syn::Error::new(
            Span::call_site(),
            format_args!("failed to generate vectors: {}", ErrorChain(&error)),
        )
    })?;
    parse_generated(&source)
}

fn swizzle_traits_impl(
    input: proc_macro2::TokenStream,
) -> Result<proc_macro2::TokenStream, syn::Error> {
    let items = Punctuated::<MacroItem, syn::Token![,]>::parse_terminated.parse2(input)?;
    let (config, _) = interpret(items, false)?;

    let mut writer = Writer::new(String::new(), config);
    writer.write_swizzle_traits().map_err(|error| {
        syn::Error::new(
            Span::call_site(),
            format_args!("failed to generate swizzle traits: {}", ErrorChain(&error)),
        )
    })?;
    parse_generated(&writer.finish())
}

fn parse_generated(source: &str) -> Result<proc_macro2::TokenStream, syn::Error> {
    source.parse().map_err(|error| {
        syn::Error::new(
            Span::call_site(),
            format_args!(
                "internal error: generator did not produce valid Rust: {}",
                ErrorChain(&error)
            ),
        )
    })
}

// -------------------------------------------------------------------------------------------------

/// One comma-separated element of a macro’s input: either `key = value` or a scalar type.
enum MacroItem {
    Setting { key: syn::Ident, value: syn::Lit },
    Scalar(syn::Ident),
}

impl Parse for MacroItem {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let ident: syn::Ident = input.parse()?;
        if input.peek(syn::Token![=]) {
            input.parse::<syn::Token![=]>()?;
            let value: syn::Lit = input.parse()?;
            Ok(MacroItem::Setting { key: ident, value })
        } else {
            Ok(MacroItem::Scalar(ident))
        }
    }
}

/// Builds the generator configuration and scalar list from parsed macro input.
///
/// If `accept_scalars` is false, scalar types and the `swizzle_traits` option are rejected.
fn interpret(
    items: Punctuated<MacroItem, syn::Token![,]>,
    accept_scalars: bool,
) -> Result<(Config, Vec<ScalarKind>), syn::Error> {
    let mut config = Config::new();
    let mut seen_keys: Vec<String> = Vec::new();
    let mut alphabet_count = 0;
    let mut scalars: Vec<ScalarKind> = Vec::new();

    for item in items {
        match item {
            MacroItem::Setting { key, value } => {
                let key_string = key.to_string();
                if key_string != "alphabet" {
                    if seen_keys.contains(&key_string) {
                        return Err(syn::Error::new(
                            key.span(),
                            format_args!("option `{key_string}` given more than once"),
                        ));
                    }
                    seen_keys.push(key_string.clone());
                }

                match key_string.as_str() {
                    "public_items" => config = config.public_items(expect_bool(&value)?),
                    "color_aliases" => config = config.color_aliases(expect_bool(&value)?),
                    "swizzle_traits" if accept_scalars => {
                        config = config.swizzle_traits(expect_bool(&value)?);
                    }
                    "runtime_path" => {
                        let path = expect_str(&value)?;
                        if !Config::is_valid_runtime_path(&path.value()) {
                            return Err(syn::Error::new(
                                path.span(),
                                "runtime path must be absolute (`::a::b`) or start with `crate`",
                            ));
                        }
                        config = config.runtime_path(path.value());
                    }
                    "alphabet" => {
                        let text = expect_str(&value)?;
                        let alphabet = Alphabet::parse(&text.value()).map_err(|error| {
                            syn::Error::new(text.span(), ErrorChain(&error))
                        })?;
                        alphabet_count += 1;
                        if alphabet_count > 5 {
                            return Err(syn::Error::new(
                                text.span(),
                                "at most 5 additional alphabets may be given",
                            ));
                        }
                        config = config.alphabet(alphabet);
                    }
                    _ => {
                        return Err(syn::Error::new(
                            key.span(),
                            format_args!("unknown option `{key_string}`"),
                        ));
                    }
                }
            }
            MacroItem::Scalar(ident) => {
                if !accept_scalars {
                    return Err(syn::Error::new(
                        ident.span(),
                        "expected `key = value`; this macro does not generate vector types",
                    ));
                }
                let name = ident.to_string();
                let kind = ScalarKind::from_rust_type(&name).ok_or_else(|| {
                    syn::Error::new(
                        ident.span(),
                        format_args!(
                            "unsupported scalar type `{name}`; \
                            expected one of `bool`, `f32`, `f64`, `i32`, `u32`, `i64`"
                        ),
                    )
                })?;
                if scalars.contains(&kind) {
                    return Err(syn::Error::new(
                        ident.span(),
                        format_args!("scalar type `{name}` listed more than once"),
                    ));
                }
                scalars.push(kind);
            }
        }
    }

    Ok((config, scalars))
}

fn expect_bool(value: &syn::Lit) -> Result<bool, syn::Error> {
    match value {
        syn::Lit::Bool(b) => Ok(b.value),
        _ => Err(syn::Error::new(value.span(), "expected `true` or `false`")),
    }
}

fn expect_str(value: &syn::Lit) -> Result<&syn::LitStr, syn::Error> {
    match value {
        syn::Lit::Str(s) => Ok(s),
        _ => Err(syn::Error::new(value.span(), "expected a string literal")),
    }
}

// -------------------------------------------------------------------------------------------------

/// Formatting wrapper which prints an [`Error`] together with its `source()` chain.
///
/// The text begins with the [`fmt::Display`] format of the error.
#[derive(Clone, Copy, Debug)]
struct ErrorChain<'a>(&'a (dyn Error + 'a));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_error_chain(fmt, self.0)
    }
}

fn format_error_chain(fmt: &mut fmt::Formatter<'_>, mut error: &(dyn Error + '_)) -> fmt::Result {
    write!(fmt, "{error}")?;
    while let Some(source) = error.source() {
        error = source;
        write!(fmt, "\n↳ {error}")?;
    }

    Ok(())
}
