//! Canonical string codec for generated enums.
//!
//! Every generated enum carries a raw name table such as
//! `(0, "IO_PROFILE_SEQUENTIAL")`. On the wire the names travel in their
//! simple form: lower-cased with the `"{type_prefix}_"` prefix removed
//! (`sequential`). Parsing re-applies the prefix and upper-cases the result.

use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Raw `(value, NAME)` table of a generated enum.
pub type NameTable = &'static [(i32, &'static str)];

/// Returns the simple name of `value`, or its decimal form when the table
/// does not declare it.
pub fn simple_string(type_prefix: &str, names: &[(i32, &str)], value: i32) -> String {
    let Some((_, raw)) = names.iter().find(|(v, _)| *v == value) else {
        return value.to_string();
    };
    let lower = raw.to_lowercase();
    let prefix = format!("{}_", type_prefix.to_lowercase());
    match lower.strip_prefix(&prefix) {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

/// Resolves a simple name back to its raw value by looking up
/// `uppercase("{type_prefix}_{s}")`.
pub fn simple_value_of(type_prefix: &str, names: &[(i32, &str)], s: &str) -> ApiResult<i32> {
    let key = format!("{}_{}", type_prefix, s).to_uppercase();
    match names.iter().find(|(_, raw)| *raw == key) {
        Some((value, _)) => Ok(*value),
        None => {
            debug!("codec lookup miss: type={}, key={}", type_prefix, key);
            Err(ApiError::NotFound {
                type_name: type_prefix.to_uppercase(),
                input: s.to_string(),
            })
        }
    }
}

/// Resolves `uppercase(s)` directly against the raw names, without any
/// prefix. Only the class-of-service enum parses this way; its raw names
/// are declared without a type prefix.
pub fn unprefixed_value_of(names: &[(i32, &str)], s: &str) -> ApiResult<i32> {
    let key = s.to_uppercase();
    names
        .iter()
        .find(|(_, raw)| *raw == key)
        .map(|(value, _)| *value)
        .ok_or_else(|| ApiError::InvalidCos {
            input: s.to_string(),
        })
}

/// A closed enumeration with a canonical simple-string form.
pub trait ProtoEnum: Sized + Copy + 'static {
    /// Lower-case type prefix stripped from raw names (`io_profile`).
    const TYPE_PREFIX: &'static str;
    /// Raw `(value, NAME)` table.
    const NAMES: NameTable;
    /// Every declared variant, in declaration order.
    const ALL: &'static [Self];

    /// Raw integer value.
    fn value(self) -> i32;

    /// Variant for a raw integer value, if declared.
    fn from_value(value: i32) -> Option<Self>;

    /// Resolves a simple name to a raw value using this enum's lookup rule.
    fn parse_value(s: &str) -> ApiResult<i32>;

    /// Raw, upper-case declared name.
    fn raw_name(self) -> &'static str {
        let value = self.value();
        Self::NAMES
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, raw)| *raw)
            .unwrap_or_default()
    }

    /// Canonical simple string (`sequential`, `alarm`).
    fn simple_string(self) -> String {
        simple_string(Self::TYPE_PREFIX, Self::NAMES, self.value())
    }

    /// Parses a simple string into a variant.
    fn simple_value_of(s: &str) -> ApiResult<Self> {
        let value = Self::parse_value(s)?;
        Self::from_value(value).ok_or_else(|| ApiError::UnknownValue {
            type_name: Self::TYPE_PREFIX.to_uppercase(),
            value,
        })
    }
}

/// Declares a closed enum with its raw name table and wires it into
/// [`ProtoEnum`], `Display`, `FromStr` and serde using the simple-string form.
///
/// An optional `parse_with = path` replaces the default prefixed lookup.
macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $prefix:literal $(, parse_with = $parse:path)? {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $raw:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $crate::codec::ProtoEnum for $name {
            const TYPE_PREFIX: &'static str = $prefix;
            const NAMES: $crate::codec::NameTable = &[$(($value, $raw)),+];
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> i32 {
                self as i32
            }

            fn from_value(value: i32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn parse_value(s: &str) -> $crate::error::ApiResult<i32> {
                $crate::codec::proto_enum!(@parse $prefix, Self::NAMES, s $(, $parse)?)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::codec::ProtoEnum::simple_string(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ApiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::codec::ProtoEnum>::simple_value_of(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::codec::ProtoEnum::simple_string(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::codec::ProtoEnum>::simple_value_of(&s)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
    (@parse $prefix:literal, $names:expr, $s:expr) => {
        $crate::codec::simple_value_of($prefix, $names, $s)
    };
    (@parse $prefix:literal, $names:expr, $s:expr, $parse:path) => {
        $parse($names, $s)
    };
}

pub(crate) use proto_enum;
