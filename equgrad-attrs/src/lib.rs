mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct, along with [`std::fmt::Display`] (which
/// prints the error message) and [`std::error::Error`].
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use equgrad_attrs::ErrorKind;
/// use equgrad_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "the expression is too deep", help = "try splitting it up")]
/// pub struct Foo;
///
/// assert_eq!(Foo.to_string(), "the expression is too deep");
/// assert_eq!(Foo.help().as_deref(), Some("try splitting it up"));
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression that should evaluate to something implementing
/// [`ToString`]. For structs with named fields, the expression is evaluated with the members of
/// the struct in scope, so they can be used in the expression (tuple structs are not supported).
///
/// [`ErrorKind`]: https://docs.rs/equgrad-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::equgrad_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }

        impl std::fmt::Display for #name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&::equgrad_error::ErrorKind::message(self))
            }
        }

        impl std::error::Error for #name {}
    }.into()
}
