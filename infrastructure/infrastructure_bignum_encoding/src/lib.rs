//! Infrastructure Layer: Big Number Encoding
//!
//! Carries big numbers through `serde` data formats.
//!
//! ## Overview
//!
//! A value is always written as exactly one string token holding its
//! canonical decimal form, which every structured format can represent
//! without loss of precision.
//!
//! - **[`decimal_token`]**: `#[serde(with = ...)]` functions for `BigNumber`
//!   fields, an `option` variant, and the [`DecimalToken`] newtype
//!
//! ## See Also
//!
//! - [`entities_bignum`]: the value model being encoded

pub mod decimal_token;

pub use decimal_token::DecimalToken;
