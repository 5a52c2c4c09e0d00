//! Arbitrary-precision signed integers over a generic limb word.
//!
//! A [`BigInt<W>`] is a minimal two's-complement sequence of `W` limbs,
//! where `W` is one of `u8`, `u16`, `u32` (the default) or `u64`. Addition
//! and multiplication compute every limb position independently on the rayon
//! pool and then resolve carries in rounds; multiplication splits a limb
//! product into half-limb pieces whenever the native product would overflow.
//!
//! ```
//! use limbint::BigInt;
//!
//! let x: BigInt<u8> = "-111111111".parse().unwrap();
//! assert_eq!(x.pow(2).to_string(), "12345678987654321");
//! ```
//!
//! Scheduling is tuned through [`config`]; the kernels emit `tracing` spans
//! at trace level but never install a subscriber.

pub mod config;
pub mod error;
pub mod limb;

mod bigint;
mod kernel;
mod ops;
mod text;

pub use bigint::BigInt;
pub use config::KernelConfig;
pub use error::{BigIntError, BigIntError as Error, Result};
pub use limb::Limb;
