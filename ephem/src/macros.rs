/// Defines a closed set of domain symbols as a fieldless enum and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - an `ALL` slice in declaration order
/// - `as_str()` and `Display` returning the domain label
/// - `FromStr` matching the label exactly, failing with `Error::$unknown`
///
/// Serde uses the label as the wire name.
///
/// Usage:
///   define_symbol_enum!(Body, unknown = UnknownBody { Sun => "Sun", Moon => "Moon" });
macro_rules! define_symbol_enum {
    (
        $(#[$meta:meta])*
        $name:ident, unknown = $unknown:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The domain label of this symbol.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err($crate::error::Error::$unknown(other.to_string())),
                }
            }
        }
    };
}
