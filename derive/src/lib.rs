// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(
  future_incompatible,
  missing_debug_implementations,
  missing_docs,
  rust_2018_compatibility,
  rust_2018_idioms,
  trivial_numeric_casts,
  unstable_features,
  unused_import_braces,
  unused_qualifications,
  unused_results,
)]

//! A crate providing custom derive functionality for the `demoshell`
//! crate.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as Tokens;
use quote::quote;
use syn::parse2;
use syn::Attribute;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;


/// An enum to decide whether or not to create a default implementation
/// of type::new().
#[derive(Clone, Debug, Eq, PartialEq)]
enum New {
  Default,
  None,
}

/// The error type used internally by this crate.
#[derive(Debug)]
struct Error(String);

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    write!(f, "{}", self.0)
  }
}

impl From<String> for Error {
  fn from(string: String) -> Error {
    Error(string)
  }
}

impl From<&'static str> for Error {
  fn from(string: &'static str) -> Error {
    Error(string.to_string())
  }
}

type Result<T> = std::result::Result<T, Error>;


/// Custom derive functionality for the `demoshell::Demo` trait.
///
/// Using this macro default implementations of the `demoshell::Tagged`
/// and `demoshell::Demo` traits can be created from a struct's `tag`
/// field. Note that `demoshell::Demo` is just a unification of the
/// `demoshell::Tagged` and `demoshell::Lifecycle` traits and that an
/// implementation of the latter will not be auto generated, because
/// demos most likely need customization of their lifecycle callbacks.
///
/// This macro roughly expands to the following code:
///
/// ```rust
/// # use std::any::TypeId;
/// # #[derive(Debug)]
/// # struct TestDemo {
/// #   tag: String,
/// # }
/// impl demoshell::Tagged for TestDemo {
///   fn tag(&self) -> &str {
///     &self.tag
///   }
/// }
///
/// impl demoshell::Demo for TestDemo {
///   fn type_id(&self) -> TypeId {
///     TypeId::of::<TestDemo>()
///   }
/// }
/// # impl demoshell::Lifecycle for TestDemo {}
/// # fn main() {}
/// ```
#[proc_macro_derive(Demo, attributes(shell))]
pub fn demo(input: TokenStream) -> TokenStream {
  match expand_demo(input) {
    Ok(tokens) => tokens,
    Err(error) => panic!("{error}"),
  }
}

fn expand_demo(input: TokenStream) -> Result<TokenStream> {
  let input = parse2::<DeriveInput>(input.into()).map_err(|_| Error::from("unable to parse input"))?;
  let new = parse_demo_attributes(&input.attrs)?;
  let tokens = expand_demo_input(&new, &input)?;
  Ok(tokens.into())
}

/// Parse the macro's attributes, i.e., a #[shell(list...)] attribute
/// list.
fn parse_demo_attributes(attributes: &[Attribute]) -> Result<New> {
  let mut new = New::None;

  // Right now we only support a single attribute at all (default_new).
  // However, we do not simply want to silently ignore other (faulty)
  // attributes, so as to inform the user about any errors early on.
  for attribute in attributes {
    if attribute.path().is_ident("shell") {
      attribute
        .parse_nested_meta(|meta| {
          if meta.path.is_ident("default_new") {
            new = New::Default;
            Ok(())
          } else {
            Err(meta.error("unsupported attribute"))
          }
        })
        .map_err(|error| Error::from(error.to_string()))?;
    }
  }
  Ok(new)
}

/// Expand the input with the implementation of the required traits.
fn expand_demo_input(new: &New, input: &DeriveInput) -> Result<Tokens> {
  match input.data {
    Data::Struct(ref data) => {
      check_struct_fields(&data.fields)?;
      Ok(expand_demo_traits(new, input))
    },
    _ => Err(Error::from("#[derive(Demo)] is only defined for structs")),
  }
}

/// Check the fields of the user's struct for required attributes.
// Note that we only check for the names of the required fields, not
// for the types. Checking types is cumbersome and best-effort anyway
// as we are working on tokens without context (a user could have a
// field of type String but that could map to ::foo::String and not the
// std one).
fn check_struct_fields(fields: &Fields) -> Result<()> {
  let tag = ("tag", "::std::string::String");

  for (req_field, req_type) in &[tag] {
    let _ = fields
      .iter()
      .find(|field| {
        if let Some(ref ident) = field.ident {
          ident == req_field
        } else {
          false
        }
      })
      .ok_or_else(|| Error::from(format!("struct field {req_field}: {req_type} not found")))?;
  }
  Ok(())
}

/// Expand the struct input with the implementation of the required
/// traits.
fn expand_demo_traits(new: &New, input: &DeriveInput) -> Tokens {
  let new_impl = expand_new_impl(new, input);
  let tagged = expand_tagged_trait(input);
  let demo = expand_demo_trait(input);

  quote! {
    #new_impl
    #tagged
    #demo
  }
}

/// Expand an implementation of Type::new() for the struct.
fn expand_new_impl(new: &New, input: &DeriveInput) -> Tokens {
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  match *new {
    New::Default => {
      quote! {
        #[allow(dead_code)]
        impl #impl_generics #name #ty_generics #where_clause {
          pub fn new(tag: ::std::string::String) -> Self {
            #name {
              tag: tag,
            }
          }
        }
      }
    },
    New::None => quote! {},
  }
}

/// Expand an implementation for the `demoshell::Tagged` trait.
fn expand_tagged_trait(input: &DeriveInput) -> Tokens {
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  quote! {
    impl #impl_generics ::demoshell::Tagged for #name #ty_generics #where_clause {
      fn tag(&self) -> &str {
        &self.tag
      }
    }
  }
}

/// Expand an implementation for the `demoshell::Demo` trait.
fn expand_demo_trait(input: &DeriveInput) -> Tokens {
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  quote! {
    impl #impl_generics ::demoshell::Demo for #name #ty_generics #where_clause {
      fn type_id(&self) -> ::std::any::TypeId {
        ::std::any::TypeId::of::<#name #ty_generics>()
      }
    }
  }
}


/// Custom derive functionality for the `demoshell::Lifecycle` trait.
///
/// Using this macro a default implementation of the
/// `demoshell::Lifecycle` trait can be created, with all callbacks
/// doing nothing. This functionality is mostly used in quick
/// prototyping/testing scenarios, because most demos will want to
/// customize at least the draw callback.
///
/// This macro roughly expands to the following code:
///
/// ```rust
/// # use demoshell::derive::Demo;
/// # #[derive(Debug, Demo)]
/// # struct TestDemo {
/// #   tag: String,
/// # }
/// impl demoshell::Lifecycle for TestDemo {}
/// # fn main() {}
/// ```
#[proc_macro_derive(Lifecycle)]
pub fn lifecycle(input: TokenStream) -> TokenStream {
  match expand_lifecycle(input) {
    Ok(tokens) => tokens,
    Err(error) => panic!("{error}"),
  }
}

fn expand_lifecycle(input: TokenStream) -> Result<TokenStream> {
  let input = parse2::<DeriveInput>(input.into()).map_err(|_| Error::from("unable to parse input"))?;
  let tokens = expand_lifecycle_input(&input)?;
  Ok(tokens.into())
}

/// Expand the input with the implementation of the `Lifecycle` trait.
fn expand_lifecycle_input(input: &DeriveInput) -> Result<Tokens> {
  match input.data {
    Data::Struct(_) => {
      let name = &input.ident;
      let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

      Ok(quote! {
        impl #impl_generics ::demoshell::Lifecycle for #name #ty_generics #where_clause {}
      })
    },
    _ => Err(Error::from("#[derive(Lifecycle)] is only defined for structs")),
  }
}
