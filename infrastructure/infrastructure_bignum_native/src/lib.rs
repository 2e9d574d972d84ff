//! Infrastructure Layer: Native Big Number Engine
//!
//! An [`Engine`](entities_bignum::Engine) whose digits live in memory obtained
//! from the C allocator rather than the Rust heap.
//!
//! ## Overview
//!
//! - **[`buffer`]**: [`LimbBuffer`], the single owner of one allocated block
//! - **[`mp`]**: [`MpInt`], sign-magnitude arithmetic reporting [`Status`] codes
//! - **[`native_engine`]**: [`NativeInt`], the engine adapter
//! - **[`config`]**: [`NativeConfig`], per-thread precision limit and allocation budget
//!
//! ## Resource Lifecycle
//!
//! Every buffer is released exactly once, when its owner drops. Temporaries
//! created inside an operation are owned locals, so they are released on
//! success and on every error path. [`live_buffers`] reports the number of
//! blocks currently held on this thread.
//!
//! ## See Also
//!
//! - [`entities_bignum`]: value model, codecs and the operations built on engines

pub mod buffer;
pub mod config;
pub mod mp;
pub mod native_engine;
pub mod status;

pub use buffer::{live_buffers, LimbBuffer};
pub use config::NativeConfig;
pub use mp::MpInt;
pub use native_engine::NativeInt;
pub use status::Status;

/// Big number backed by the native engine
pub type NativeBigNumber = entities_bignum::BigNumber<NativeInt>;
