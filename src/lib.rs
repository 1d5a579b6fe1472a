// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(
  clippy::let_unit_value,
  clippy::redundant_field_names,
)]
#![warn(
  future_incompatible,
  missing_copy_implementations,
  missing_debug_implementations,
  missing_docs,
  rust_2018_compatibility,
  rust_2018_idioms,
  trivial_numeric_casts,
  unreachable_pub,
  unstable_features,
  unused_import_braces,
  unused_qualifications,
  unused_results,
)]

//! A crate containing the basic infrastructure for graphics demo
//! shells: tagged tracing of lifecycle events, a minimal shell driving
//! a demo through said lifecycle, and a CPU particle system for
//! putting load on a draw loop. It strives for being completely
//! agnostic of the underlying system and its rendering machinery.

mod demo;
mod lifecycle;
mod logger;
mod particles;
mod phase;
mod shell;
mod tagged;

pub use self::demo::Demo;
pub use self::lifecycle::Lifecycle;
pub use self::logger::TaggedLogger;
pub use self::particles::Emitter;
pub use self::particles::Particle;
pub use self::particles::ParticleSystem;
pub use self::particles::Sphere;
pub use self::phase::Phase;
pub use self::shell::Shell;
pub use self::tagged::Tagged;

/// A module providing custom derive functionality for `demoshell`
/// related traits.
///
/// The module merely re-reports the procedural macros provided by the
/// `demoshell_derive` crate.
#[cfg(feature = "derive")]
pub mod derive {
  pub use demoshell_derive::*;
}
