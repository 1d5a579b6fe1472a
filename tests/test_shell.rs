// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

#![deny(warnings)]

//! Tests for the demo shell.

mod common;

use fastrand::Rng;

use demoshell::ParticleSystem;
use demoshell::Phase;
use demoshell::Shell;

use common::Counts;
use common::ParticleDemo;
use common::TestDemo;


#[test]
fn phases_display_their_trace_message() {
  assert_eq!(Phase::Load.to_string(), "load");
  assert_eq!(Phase::Draw.to_string(), "draw");
  assert_eq!(Phase::Release.to_string(), "release");
  assert_eq!(Phase::Quit.to_string(), "quit");
}

#[test]
fn lifecycle_is_traced_in_order() {
  let demo = Box::new(TestDemo::new("Loader", Counts::default()));
  let mut shell = Shell::with_writer(demo, Vec::new());

  shell.load();
  shell.draw(0.016);
  shell.draw(0.016);
  shell.release();

  let buffer = shell.quit();
  let expected = "[Loader] load\n\
                  [Loader] draw\n\
                  [Loader] draw\n\
                  [Loader] release\n\
                  [Loader] quit\n";
  assert_eq!(String::from_utf8(buffer).unwrap(), expected);
}

#[test]
fn callbacks_are_forwarded() {
  let counts = Counts::default();
  let demo = Box::new(TestDemo::new("Fwd", counts.clone()));
  let mut shell = Shell::with_writer(demo, Vec::new());

  shell.load();
  shell.draw(0.5);
  shell.draw(0.25);
  shell.release();

  assert_eq!(counts.loads.get(), 1);
  assert_eq!(counts.draws.get(), 2);
  assert!((counts.stepped.get() - 0.75).abs() < f32::EPSILON);
  assert_eq!(counts.releases.get(), 1);
}

#[test]
fn tag_is_taken_from_the_demo() {
  let demo = Box::new(TestDemo::new("FromDemo", Counts::default()));
  let shell = Shell::with_writer(demo, Vec::new());

  assert_eq!(shell.logger().tag(), "FromDemo");
  assert_eq!(shell.demo().tag(), "FromDemo");
}

#[test]
fn demos_can_be_downcast() {
  let demo = Box::new(TestDemo::new("Cast", Counts::default()));
  let mut shell = Shell::with_writer(demo, Vec::new());

  assert!(shell.demo().downcast_ref::<TestDemo>().is_some());
  assert!(shell.demo().downcast_ref::<ParticleDemo>().is_none());
  assert!(shell.demo_mut().downcast_mut::<TestDemo>().is_some());
}

#[test]
fn shells_do_not_cross_contaminate() {
  let demo_x = Box::new(TestDemo::new("X", Counts::default()));
  let demo_y = Box::new(TestDemo::new("Y", Counts::default()));
  let mut shell_x = Shell::with_writer(demo_x, Vec::new());
  let mut shell_y = Shell::with_writer(demo_y, Vec::new());

  shell_x.load();
  shell_y.load();

  let expected_x = "[X] load\n\
                    [X] quit\n";
  let expected_y = "[Y] load\n\
                    [Y] quit\n";
  assert_eq!(String::from_utf8(shell_x.quit()).unwrap(), expected_x);
  assert_eq!(String::from_utf8(shell_y.quit()).unwrap(), expected_y);
}

#[test]
fn particle_demo_runs_under_the_shell() {
  let system = ParticleSystem::with_rng(Rng::with_seed(42));
  let demo = Box::new(ParticleDemo::new("DrawLoad", system, 16));
  let mut shell = Shell::with_writer(demo, Vec::new());

  shell.load();
  shell.draw(0.016);

  {
    let demo = shell.demo().downcast_ref::<ParticleDemo>().unwrap();
    assert_eq!(demo.system.particles().len(), 16);
    assert!(demo.system.particles().iter().all(|particle| particle.lifespan >= 0.0));
  }

  shell.release();

  let demo = shell.demo().downcast_ref::<ParticleDemo>().unwrap();
  assert_eq!(demo.system.particles().len(), 0);
}
