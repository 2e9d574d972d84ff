//! Decimal Token Codec
//!
//! Maps a [`BigNumber`] to exactly one string token holding its canonical
//! decimal form, and back. Numeric tokens are rejected on input: a JSON
//! number cannot carry arbitrary precision through every reader, so the
//! string form is the only accepted representation.
//!
//! ## Usage
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Account {
//!     #[serde(with = "infrastructure_bignum_encoding::decimal_token")]
//!     balance: BigNumber,
//!     #[serde(with = "infrastructure_bignum_encoding::decimal_token::option")]
//!     limit: Option<BigNumber>,
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use entities_bignum::{BigNumber, Engine, MalachiteInt};
use serde::de::{self, Visitor};
use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};

/// Write `value` as a single decimal string token
pub fn serialize<E, S>(value: &BigNumber<E>, serializer: S) -> Result<S::Ok, S::Error>
where
    E: Engine,
    S: Serializer,
{
    let text = value.to_string_radix(10).map_err(ser::Error::custom)?;
    serializer.serialize_str(&text)
}

/// Read a value from a single decimal string token
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<BigNumber<E>, D::Error>
where
    E: Engine,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(DecimalVisitor(PhantomData))
}

struct DecimalVisitor<E>(PhantomData<E>);

impl<E: Engine> Visitor<'_> for DecimalVisitor<E> {
    type Value = BigNumber<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a decimal integer string")
    }

    fn visit_str<DE>(self, v: &str) -> Result<Self::Value, DE>
    where
        DE: de::Error,
    {
        BigNumber::parse(v).map_err(DE::custom)
    }
}

/// Same token format for optional values; `None` is the format's null
pub mod option {
    use super::*;

    /// Write `Some(value)` as a decimal token, `None` as null
    pub fn serialize<E, S>(value: &Option<BigNumber<E>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: Engine,
        S: Serializer,
    {
        match value {
            Some(value) => {
                let text = value.to_string_radix(10).map_err(ser::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Read null as `None`, a decimal token as `Some`
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Option<BigNumber<E>>, D::Error>
    where
        E: Engine,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionVisitor(PhantomData))
    }

    struct OptionVisitor<E>(PhantomData<E>);

    impl<'de, E: Engine> Visitor<'de> for OptionVisitor<E> {
        type Value = Option<BigNumber<E>>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("null or a decimal integer string")
        }

        fn visit_none<DE>(self) -> Result<Self::Value, DE>
        where
            DE: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<DE>(self) -> Result<Self::Value, DE>
        where
            DE: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            super::deserialize(deserializer).map(Some)
        }
    }
}

/// A [`BigNumber`] that serializes as its decimal token
pub struct DecimalToken<E: Engine = MalachiteInt>(pub BigNumber<E>);

impl<E: Engine> DecimalToken<E> {
    /// Unwrap the inner value
    pub fn into_inner(self) -> BigNumber<E> {
        self.0
    }
}

impl<E: Engine> PartialEq for DecimalToken<E> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<E: Engine> Eq for DecimalToken<E> {}

impl<E: Engine> fmt::Debug for DecimalToken<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalToken({})", self.0)
    }
}

impl<E: Engine> From<BigNumber<E>> for DecimalToken<E> {
    fn from(value: BigNumber<E>) -> Self {
        Self(value)
    }
}

impl<E: Engine> Deref for DecimalToken<E> {
    type Target = BigNumber<E>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E: Engine> Serialize for DecimalToken<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl<'de, E: Engine> Deserialize<'de> for DecimalToken<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer).map(DecimalToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Token = DecimalToken<MalachiteInt>;

    fn token(text: &str) -> Token {
        DecimalToken(BigNumber::parse(text).unwrap())
    }

    #[test]
    fn test_serializes_as_one_string() {
        let json = serde_json::to_string(&token("-340282366920938463463374607431768211456")).unwrap();
        assert_eq!(json, "\"-340282366920938463463374607431768211456\"");
        assert_eq!(serde_json::to_string(&token("0")).unwrap(), "\"0\"");
    }

    #[test]
    fn test_deserializes_decimal_string() {
        let parsed: Token = serde_json::from_str("\"123456789012345678901234567890\"").unwrap();
        assert_eq!(parsed, token("123456789012345678901234567890"));
    }

    #[test]
    fn test_rejects_numbers_and_garbage() {
        assert!(serde_json::from_str::<Token>("42").is_err());
        assert!(serde_json::from_str::<Token>("\"12x\"").is_err());
        assert!(serde_json::from_str::<Token>("\"\"").is_err());
    }

    #[test]
    fn test_deref_and_into_inner() {
        let value = token("77");
        assert_eq!(value.to_i32().unwrap(), 77);
        assert_eq!(value.into_inner(), BigNumber::from_i32(77).unwrap());
    }
}
