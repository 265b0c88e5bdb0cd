//! Bloom is a generative flower-light animation engine.
//!
//! Bloom turns wall-clock time into colors for a cylindrical LED lamp: a
//! slowly drifting base hue is modulated by a handful of "petals", rotating
//! sine waves that bloom, linger, and die on a stochastic schedule.
//!
//! # Pipeline overview
//!
//! 1. **Plant**: a validated [`Tuning`] plus an RNG grows a [`Flower`]
//! 2. **Render**: `Flower + time -> one Color per grid cell`, pushed into a
//!    [`PixelSink`]
//! 3. **Blit** (optional): [`OpcDisplay`] streams the frame to an Open Pixel
//!    Control server over TCP
//! 4. **Grow**: dead petals are replaced at the flower's current energy
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total animation math**: once a flower exists, sampling it never
//!   fails; all fallible work (tuning files, distribution construction,
//!   TCP) is front-loaded or isolated at the transport seam.
//! - **Injected randomness**: every draw goes through a caller-supplied
//!   [`rand::Rng`], so seeded runs reproduce exactly.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod color;
mod flower;
mod foundation;
mod opc;
mod petal;
mod sink;
mod tuning;

pub use color::Color;
pub use flower::{Flower, GrowEvent};
pub use foundation::core::Geometry;
pub use foundation::error::{BloomError, BloomResult};
pub use opc::{OpcClient, OpcDisplay, clear};
pub use petal::{Petal, PetalDistributions, PetalParams};
pub use sink::{GridSink, PixelSink};
pub use tuning::Tuning;
