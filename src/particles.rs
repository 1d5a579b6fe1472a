// Copyright (C) 2025-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use std::mem::take;

use fastrand::Rng;

use glam::Mat4;
use glam::Vec3;
use glam::Vec4;


/// A single particle as simulated by a [`ParticleSystem`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
  /// The particle's position, in world space.
  pub position: Vec3,
  /// The particle's velocity.
  pub velocity: Vec3,
  /// The particle's radius.
  pub radius: f32,
  /// The particle's color, as RGBA.
  pub color: Vec4,
  /// The particle's remaining lifespan, in seconds.
  pub lifespan: f32,
}


/// An emitter spawning particles within a cylindrical volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emitter {
  /// The transformation applied to spawn positions.
  pub transform: Mat4,
  /// The height of the emission volume.
  pub height: f32,
  /// The radius of the emission volume.
  pub radius: f32,
}

impl Default for Emitter {
  /// Create an `Emitter` spawning all particles at the origin.
  fn default() -> Self {
    Self {
      transform: Mat4::IDENTITY,
      height: 0.0,
      radius: 0.0,
    }
  }
}


/// A sphere that particles collide against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
  /// The sphere's center position.
  pub position: Vec3,
  /// The sphere's radius.
  pub radius: f32,
}


/// A CPU driven particle system.
///
/// Particles spawn from an [`Emitter`], fall under a fixed vertical
/// acceleration, and collide against a set of [`Sphere`] objects as
/// well as the ground plane. Expired particles respawn from the
/// emitter.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
  /// The simulated particles.
  particles: Vec<Particle>,
  /// The emitter that particles (re)spawn from.
  emitter: Emitter,
  /// The spheres that particles collide against.
  spheres: Vec<Sphere>,
  /// The squared radius of each sphere, precomputed for the collision
  /// test.
  squared_radii: Vec<f32>,
  /// The random number generator feeding spawn parameters.
  rng: Rng,
}

impl ParticleSystem {
  /// Create a new, empty `ParticleSystem`.
  pub fn new() -> Self {
    Self::with_rng(Rng::new())
  }

  /// Create a new `ParticleSystem` using the provided random number
  /// generator.
  ///
  /// Seeding the generator makes the simulation deterministic.
  pub fn with_rng(rng: Rng) -> Self {
    Self {
      particles: Vec::new(),
      emitter: Emitter::default(),
      spheres: Vec::new(),
      squared_radii: Vec::new(),
      rng,
    }
  }

  /// Set the emitter that particles (re)spawn from.
  pub fn set_emitter(&mut self, emitter: Emitter) {
    self.emitter = emitter;
  }

  /// Replace the set of spheres that particles collide against.
  pub fn set_collision_spheres(&mut self, spheres: &[Sphere]) {
    self.spheres.clear();
    self.spheres.extend_from_slice(spheres);

    self.squared_radii.clear();
    self
      .squared_radii
      .extend(spheres.iter().map(|sphere| sphere.radius * sphere.radius));
  }

  /// Adjust the number of simulated particles.
  ///
  /// If the count actually changed all particles are recreated, with
  /// radius 0.5 and a random lifespan of up to twenty seconds. A
  /// matching count leaves the existing particles untouched.
  pub fn set_particle_count(&mut self, count: usize) {
    if self.particles.len() != count {
      self.particles.clear();
      self.particles.resize_with(count, Particle::default);

      for particle in &mut self.particles {
        particle.lifespan = self.rng.f32() * 20.0;
        particle.radius = 0.5;
      }
    }
  }

  /// Retrieve the simulated particles.
  pub fn particles(&self) -> &[Particle] {
    &self.particles
  }

  /// Retrieve the simulated particles, mutably.
  pub fn particles_mut(&mut self) -> &mut [Particle] {
    &mut self.particles
  }

  /// Advance the simulation by `step` seconds.
  pub fn update(&mut self, step: f32) {
    let mut particles = take(&mut self.particles);

    for particle in &mut particles {
      particle.lifespan -= step;

      if particle.lifespan < 0.0 {
        *particle = self.emit_particle();
        particle.lifespan = self.rng.f32() * 19.0 + 12.0;
        continue
      }

      particle.position += particle.velocity * step;
      // A very simplified model applying a typical vertical
      // acceleration.
      particle.velocity.y += step * -0.98;

      // Resolve at most one collision against the spheres.
      for (sphere, radius_sq) in self.spheres.iter().zip(&self.squared_radii) {
        let to_particle = particle.position - sphere.position;
        if to_particle.length_squared() < *radius_sq {
          // Project the particle back onto the sphere's surface and
          // redirect it, at half its speed.
          let direction = to_particle.normalize();
          particle.position = sphere.position + direction * sphere.radius;
          particle.velocity = direction * (particle.velocity.length() * 0.5);
          break
        }
      }

      // Collide against the ground plane.
      if particle.position.y < particle.radius {
        particle.position.y = particle.radius;
        particle.velocity.x *= 0.4;
        particle.velocity.y *= -0.3;
        particle.velocity.z *= 0.4;
      }
    }

    self.particles = particles;
  }

  /// Spawn a new particle from the emitter's volume.
  ///
  /// The caller is responsible for assigning a lifespan.
  fn emit_particle(&mut self) -> Particle {
    let spin = self.rng.f32();
    let u = self.rng.f32() * self.emitter.height;
    let r = self.rng.f32() * self.emitter.radius;
    let pos = Vec4::new(r * spin.sin(), u, r * spin.cos(), 1.0);
    // Spawn positions are relative to the emitter's orientation.
    let position = (self.emitter.transform * pos).truncate();

    Particle {
      position,
      // The emitter is assumed to sit at the origin.
      velocity: position * (spin * 4.0),
      radius: 0.3 + self.rng.f32() * 0.6,
      color: Vec4::new(self.rng.f32(), self.rng.f32(), self.rng.f32(), 1.0),
      lifespan: 0.0,
    }
  }
}

impl Default for ParticleSystem {
  fn default() -> Self {
    Self::new()
  }
}
