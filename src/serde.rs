//! Support for serde.
#![cfg(feature = "serde")]

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;
use serde::de;

//------------ DeserializeNativeOrStr ----------------------------------------

/// A trait for deserializing a value from its native integer or a string.
///
/// The trait is implemented for the native integer types underlying the
/// registry types so that their `Deserialize` impls can defer to it. Human
/// readable formats may provide either the raw integer or a string which is
/// handed to the target type's `FromStr`. Compact formats always provide
/// the integer.
pub trait DeserializeNativeOrStr<'de, T>: Sized {
    fn deserialize_native_or_str<D: de::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<T, D::Error>;
}

impl<'de, T> DeserializeNativeOrStr<'de, T> for u16
where
    T: From<u16> + FromStr,
{
    fn deserialize_native_or_str<D: de::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<T, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(NativeOrStrVisitor(PhantomData))
        } else {
            deserializer.deserialize_u16(NativeOrStrVisitor(PhantomData))
        }
    }
}

//------------ NativeOrStrVisitor --------------------------------------------

struct NativeOrStrVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for NativeOrStrVisitor<T>
where
    T: From<u16> + FromStr,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or a string")
    }

    fn visit_u16<E: de::Error>(self, v: u16) -> Result<Self::Value, E> {
        Ok(T::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        u16::try_from(v)
            .map(T::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        T::from_str(v)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
