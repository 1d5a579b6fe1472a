// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later


/// A trait representing the lifecycle callbacks of a demo.
///
/// All callbacks default to doing nothing, so implementations only
/// need to provide the ones they actually care about.
pub trait Lifecycle {
  /// Load the demo's resources.
  ///
  /// Invoked once by the shell before the first draw.
  fn load(&mut self) {}

  /// Draw a single frame.
  ///
  /// `step` is the time in seconds that passed since the previous
  /// draw.
  #[allow(unused_variables)]
  fn draw(&mut self, step: f32) {}

  /// Release the demo's resources.
  ///
  /// Invoked once by the shell after the last draw.
  fn release(&mut self) {}
}
