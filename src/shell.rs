// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::io::Stdout;
use std::io::Write;

use crate::Demo;
use crate::Phase;
use crate::TaggedLogger;


/// A minimal application shell driving a single [`Demo`] through its
/// lifecycle.
///
/// Every invoked callback is traced as a `[<tag>] <phase>` line, with
/// the tag taken from the demo being driven. The shell imposes no
/// ordering on the lifecycle: it traces and forwards, nothing more.
#[derive(Debug)]
pub struct Shell<W = Stdout> {
  /// The demo being driven.
  demo: Box<dyn Demo>,
  /// The logger used for tracing lifecycle phases.
  logger: TaggedLogger,
  /// The writer that trace lines end up in.
  writer: W,
}

impl Shell<Stdout> {
  /// Create a new `Shell` driving the provided demo and tracing to
  /// standard output.
  pub fn new(demo: Box<dyn Demo>) -> Self {
    Self::with_writer(demo, io::stdout())
  }
}

impl<W> Shell<W>
where
  W: Write,
{
  /// Create a new `Shell` driving the provided demo and tracing to the
  /// provided writer.
  pub fn with_writer(demo: Box<dyn Demo>, writer: W) -> Self {
    let logger = TaggedLogger::new(demo.tag());
    Self {
      demo,
      logger,
      writer,
    }
  }

  /// Emit the trace line for the given phase.
  fn trace(&mut self, phase: Phase) {
    // Trace output is best-effort.
    self
      .logger
      .emit_to(&mut self.writer, phase.as_str())
      .unwrap_or(())
  }

  /// Have the demo load its resources.
  pub fn load(&mut self) {
    self.trace(Phase::Load);
    self.demo.load()
  }

  /// Have the demo draw a frame.
  ///
  /// `step` is the time in seconds that passed since the previous
  /// draw; it is forwarded to the demo verbatim.
  pub fn draw(&mut self, step: f32) {
    self.trace(Phase::Draw);
    self.demo.draw(step)
  }

  /// Have the demo release its resources.
  pub fn release(&mut self) {
    self.trace(Phase::Release);
    self.demo.release()
  }

  /// Shut the shell down, returning the trace writer.
  pub fn quit(mut self) -> W {
    self.trace(Phase::Quit);
    self.writer
  }

  /// Retrieve a reference to the driven demo.
  pub fn demo(&self) -> &(dyn Demo + 'static) {
    self.demo.as_ref()
  }

  /// Retrieve a mutable reference to the driven demo.
  pub fn demo_mut(&mut self) -> &mut (dyn Demo + 'static) {
    self.demo.as_mut()
  }

  /// Retrieve the logger used for tracing.
  pub fn logger(&self) -> &TaggedLogger {
    &self.logger
  }
}
