//! The [`validator!`] declaration macro.
//!
//! Declares a validator struct, its `Validate` impl, and a snake_case
//! factory function in one block:
//!
//! ```
//! use formwork_validator::{validator, Validate, ValidationError};
//!
//! validator! {
//!     /// Rejects strings containing whitespace.
//!     pub NoWhitespace for str;
//!     rule(input) { !input.chars().any(char::is_whitespace) }
//!     error(input) { ValidationError::new("no_whitespace", "must not contain whitespace") }
//!     fn no_whitespace();
//! }
//!
//! assert!(no_whitespace().validate("abc").is_ok());
//! assert!(no_whitespace().validate("a b").is_err());
//! ```

/// Declares a validator: struct, `Validate` impl, and factory function.
///
/// Two shapes are supported:
///
/// - **Unit validator** — no configuration, a zero-sized type.
/// - **Struct validator** — configured through fields; `new` takes every
///   field in declaration order.
///
/// `#[derive(Debug, Clone)]` is always applied; add more derives with an
/// ordinary `#[derive(...)]` attribute on the declaration.
#[macro_export]
macro_rules! validator {
    // Unit validator.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // Struct validator with fields; `new` takes the fields in order.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
