//! API Facades Layer
//!
//! The big integer as callers see it. [`BigInt`] hides which engine backs
//! it; the choice is made at build time:
//!
//! - default: the managed engine ([`entities_bignum::MalachiteInt`])
//! - feature `native-engine`: the unmanaged-buffer engine
//!   (`infrastructure_bignum_native::NativeInt`)
//!
//! [`bigint_facades`] exposes the operation surface under its
//! language-neutral names for callers that prefer free functions.

pub mod bigint_facades;

pub use bigint_facades::*;

pub use entities_bignum::{BigNumError, BigNumResult, Engine, MAX_RADIX, MIN_RADIX};
pub use infrastructure_bignum_encoding::{decimal_token, DecimalToken};

/// Engine selected for this build
#[cfg(not(feature = "native-engine"))]
pub type DefaultEngine = entities_bignum::MalachiteInt;

/// Engine selected for this build
#[cfg(feature = "native-engine")]
pub type DefaultEngine = infrastructure_bignum_native::NativeInt;

#[cfg(feature = "native-engine")]
pub use infrastructure_bignum_native::{live_buffers, NativeConfig};

/// Arbitrary precision signed integer on the build's engine
pub type BigInt = entities_bignum::BigNumber<DefaultEngine>;

/// Decimal token wrapper on the build's engine
pub type BigIntToken = DecimalToken<DefaultEngine>;
