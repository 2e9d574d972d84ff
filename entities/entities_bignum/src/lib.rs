//! Entities Layer: Big Numbers
//!
//! Provides the arbitrary precision signed integer used by every other layer:
//! - The canonical value model ([`BigNumber`])
//! - The engine capability set ([`Engine`]) and the managed engine ([`MalachiteInt`])
//! - Two's complement byte and radix string codecs
//! - Arithmetic, bitwise and comparison operations
//! - In-place variants of the binary arithmetic operations
//!
//! Engines that keep their digits in unmanaged memory live in the
//! infrastructure layer and plug in through [`Engine`].

pub mod arithmetic;
pub mod bitwise;
pub mod codec;
pub mod engine;
pub mod error;
pub mod in_place;
pub mod malachite_engine;
pub mod value;

pub use codec::{MAX_RADIX, MIN_RADIX};
pub use engine::Engine;
pub use error::{BigNumError, BigNumResult};
pub use malachite_engine::MalachiteInt;
pub use value::BigNumber;
