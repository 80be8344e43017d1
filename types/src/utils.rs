//! Utilities which are not linked to the domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        use self::$name::{$falsy, $truthy};

        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            #[allow(missing_docs)]
            $truthy,
            #[allow(missing_docs)]
            $falsy,
        }

        impl ::std::ops::Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    $falsy => $truthy,
                    $truthy => $falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq)]
        /// The character does not denote any variant
        pub struct $parse_err {
            failed: char,
        }

        impl ::std::fmt::Display for $parse_err {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "Cannot parse {} from {:?}",
                    stringify!($name),
                    self.failed
                )
            }
        }

        impl ::std::error::Error for $parse_err {}

        impl TryFrom<char> for $name {
            type Error = $parse_err;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c {
                    $true_ch => Ok($truthy),
                    $false_ch => Ok($falsy),
                    _ => Err($parse_err { failed: c }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let symbol = match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}
