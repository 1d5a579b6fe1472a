// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::io::Write;


/// A logger associating a fixed tag with every emitted message.
///
/// The tag is provided at construction time and never changes over the
/// logger's lifetime. Emitted lines have the form `[<tag>] <message>`:
/// ```rust
/// # use demoshell::TaggedLogger;
/// let logger = TaggedLogger::new("Loader");
/// // Prints `[Loader] started`.
/// logger.emit("started");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaggedLogger {
  /// The tag rendered in brackets in front of every message.
  tag: String,
}

impl TaggedLogger {
  /// Create a new `TaggedLogger` using the provided tag.
  ///
  /// Any string is a valid tag, including the empty one.
  pub fn new<T>(tag: T) -> Self
  where
    T: Into<String>,
  {
    Self { tag: tag.into() }
  }

  /// Retrieve the logger's tag.
  pub fn tag(&self) -> &str {
    &self.tag
  }

  /// Emit a tag-prefixed line to standard output.
  ///
  /// Failures of the underlying stream are not surfaced; use
  /// [`emit_to`][Self::emit_to] to get hold of the result instead.
  pub fn emit(&self, message: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    self.emit_to(&mut handle, message).unwrap_or(())
  }

  /// Emit a tag-prefixed line to the provided writer.
  pub fn emit_to<W>(&self, writer: &mut W, message: &str) -> io::Result<()>
  where
    W: Write,
  {
    writeln!(writer, "[{}] {message}", self.tag)
  }
}
