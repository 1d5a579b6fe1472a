// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;


/// A lifecycle phase of a demo as driven by a
/// [`Shell`][crate::Shell].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Phase {
  /// The demo is loading its resources.
  Load,
  /// The demo is drawing a frame.
  Draw,
  /// The demo is releasing its resources.
  Release,
  /// The shell is shutting down.
  Quit,
}

impl Phase {
  /// Retrieve the message emitted when the phase is traced.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Load => "load",
      Self::Draw => "draw",
      Self::Release => "release",
      Self::Quit => "quit",
    }
  }
}

impl Display for Phase {
  /// Format the `Phase` into the given formatter.
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.as_str())
  }
}
