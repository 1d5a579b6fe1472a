// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::Cell;
use std::rc::Rc;

use demoshell::derive::Demo;

use demoshell::Emitter;
use demoshell::Lifecycle;
use demoshell::ParticleSystem;


/// Counts of lifecycle callback invocations, shared between a demo and
/// the driving test.
#[derive(Clone, Debug, Default)]
pub struct Counts {
  /// The number of times `load` was invoked.
  pub loads: Rc<Cell<usize>>,
  /// The number of times `draw` was invoked.
  pub draws: Rc<Cell<usize>>,
  /// The accumulated `step` values seen by `draw`.
  pub stepped: Rc<Cell<f32>>,
  /// The number of times `release` was invoked.
  pub releases: Rc<Cell<usize>>,
}


/// A demo counting lifecycle callback invocations.
#[derive(Debug, Demo)]
pub struct TestDemo {
  tag: String,
  counts: Counts,
}

#[allow(unused)]
impl TestDemo {
  /// Create a new `TestDemo` with the given tag, reporting invocations
  /// through the given counts.
  pub fn new(tag: &str, counts: Counts) -> Self {
    Self {
      tag: tag.to_string(),
      counts,
    }
  }
}

impl Lifecycle for TestDemo {
  fn load(&mut self) {
    self.counts.loads.set(self.counts.loads.get() + 1)
  }

  fn draw(&mut self, step: f32) {
    self.counts.draws.set(self.counts.draws.get() + 1);
    self.counts.stepped.set(self.counts.stepped.get() + step)
  }

  fn release(&mut self) {
    self.counts.releases.set(self.counts.releases.get() + 1)
  }
}


/// A demo animating a CPU particle system, putting load on the draw
/// loop.
#[derive(Debug, Demo)]
pub struct ParticleDemo {
  tag: String,
  /// The simulated particle system.
  pub system: ParticleSystem,
  /// The number of particles to simulate.
  pub count: usize,
}

#[allow(unused)]
impl ParticleDemo {
  /// Create a new `ParticleDemo` simulating the given number of
  /// particles.
  pub fn new(tag: &str, system: ParticleSystem, count: usize) -> Self {
    Self {
      tag: tag.to_string(),
      system,
      count,
    }
  }
}

impl Lifecycle for ParticleDemo {
  fn load(&mut self) {
    self.system.set_emitter(Emitter {
      height: 2.0,
      radius: 3.0,
      ..Emitter::default()
    });
    self.system.set_particle_count(self.count)
  }

  fn draw(&mut self, step: f32) {
    self.system.update(step)
  }

  fn release(&mut self) {
    self.system.set_particle_count(0)
  }
}
