#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate of the zoo workspace:
//!
//! * [`macro@main`] boots the Tokio runtime from a `zoo_runtime` profile.
//! * [`macro@api_model`] and [`macro@api_handler`] keep DTOs and Axum handlers in line with
//!   the generated `OpenAPI` document.
//! * [`macro@zoo_error`] turns an enum into a context-aware `thiserror` error.
//! * [`macro@zoo_slice`] wraps feature state into a shareable slice handle.
//!
//! Examples below are `ignore`d: they only make sense inside consuming crates.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Bootstraps the Tokio runtime configured by `zoo_runtime`.
///
/// Turns an `async fn main` returning a `Result` into a plain `fn main` that builds a
/// runtime from the chosen profile and blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - Server preset (bigger stacks, long keep-alive).
/// * `memory_efficient` - Half the workers, smaller stacks.
/// * `default` - Worker count detected from the available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[zoo_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data model (request or response body).
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` unless already present.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * **Serde Policy**: `rename_all = "camelCase"` and `deny_unknown_fields`, both overridable.
///
/// # Example
///
/// ```rust,ignore
/// use zoo_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct HabitatRef {
///     pub name: String,
///     pub terrain_type: TerrainType,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with the `OpenAPI` document.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `post`, `path = "..."`,
/// `params(...)`, `request_body = ...`, `responses(...)`, `tag = "..."`).
///
/// # Example
///
/// ```rust,ignore
/// use zoo_derive::api_handler;
///
/// #[api_handler(
///     post,
///     path = "/animals/{name}/feed",
///     responses((status = OK, body = AnimalView)),
///     tag = "Animals"
/// )]
/// pub async fn feed_animal(/* extractors */) -> Result<Json<AnimalView>, KeeperError> {
///     todo!()
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// # Features
///
/// * **Automatic Derives**: `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: a companion `<Name>Ext` trait adding `.context(...)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Conversions**: `From<Source>` for variants with a `source` field, and
///   `From<&'static str>` / `From<String>` when an `Internal` variant exists.
///
/// # Requirements
///
/// 1. Applies to enums with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[zoo_derive::zoo_error]
/// pub enum KeeperError {
///     #[error("Animal not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal keeper error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn zoo_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// Generates `<Name>Inner` with the declared fields, an `Arc`-backed `<Name>` wrapper
/// that derefs to it, and the `FeatureSlice` impl used by the kernel registry.
///
/// # Example
/// ```rust,ignore
/// #[zoo_derive::zoo_slice]
/// pub struct Keeper {
///     store: Database<Zoo>,
/// }
///
/// let keeper = Keeper::new(KeeperInner { store });
/// ```
#[proc_macro_attribute]
pub fn zoo_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
