#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the Mona crates.
//! Right now this is a single attribute, [`macro@mona_error`], which keeps every error enum
//! in the workspace wired the same way: `thiserror` display strings, optional context,
//! and `?`-friendly conversions from upstream errors.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mona-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for domain-specific error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * A `<Name>Ext` trait with `.context(...)` for `Result<T, Name>`, and for
///   `Result<T, Source>` of every variant that wraps an upstream error.
/// * `From<Source>` for variants with a `source` field (or a field marked `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. Variants that wrap a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use mona_derive::mona_error;
/// use std::borrow::Cow;
///
/// #[mona_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     let raw = builder.build().context("Building layered config")?;
///     raw.try_deserialize().map_err(|_| "Settings are malformed".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn mona_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
