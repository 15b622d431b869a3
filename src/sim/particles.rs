//! Particle bursts
//!
//! Purely visual. Particles move in straight lines and fade out linearly.

use glam::Vec2;
use rand::Rng;

use super::color::PaletteColor;
use super::state::Particle;
use crate::config::GameConfig;
use crate::random_in;

/// Append one burst of `config.burst_size` particles at `center`
pub fn spawn_burst<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    config: &GameConfig,
    center: Vec2,
    color: PaletteColor,
) {
    let max_speed = config.particle_max_speed;
    particles.reserve(config.burst_size);
    for _ in 0..config.burst_size {
        particles.push(Particle {
            pos: center,
            vel: Vec2::new(
                random_in(rng, -max_speed, max_speed),
                random_in(rng, -max_speed, max_speed),
            ),
            radius: random_in(rng, config.particle_min_radius, config.particle_max_radius),
            color,
            life: config.particle_life,
        });
    }
    log::debug!("Burst of {} at ({:.1}, {:.1})", config.burst_size, center.x, center.y);
}

/// Move every particle one tick and drop the ones that burned out
pub fn update_particles(particles: &mut Vec<Particle>) {
    *particles = std::mem::take(particles)
        .into_iter()
        .filter_map(|mut p| {
            p.pos += p.vel;
            p.life = p.life.saturating_sub(1);
            (p.life > 0).then_some(p)
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_ranges() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, &config, Vec2::new(50.0, 60.0), PaletteColor::Green);

        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(50.0, 60.0));
            assert!(p.vel.x >= -2.0 && p.vel.x <= 2.0);
            assert!(p.vel.y >= -2.0 && p.vel.y <= 2.0);
            assert!(p.radius >= 1.0 && p.radius <= 4.0);
            assert_eq!(p.life, 30);
            assert_eq!(p.color, PaletteColor::Green);
        }
    }

    #[test]
    fn test_burst_dies_after_life() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, &config, Vec2::ZERO, PaletteColor::Red);

        for _ in 0..29 {
            update_particles(&mut particles);
        }
        assert_eq!(particles.len(), 20);
        assert!(particles.iter().all(|p| p.life == 1));

        update_particles(&mut particles);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_update_moves_by_velocity() {
        let mut particles = vec![Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(1.5, -0.5),
            radius: 2.0,
            color: PaletteColor::Blue,
            life: 30,
        }];
        update_particles(&mut particles);
        assert_eq!(particles[0].pos, Vec2::new(11.5, 9.5));
        assert_eq!(particles[0].life, 29);
    }

    #[test]
    fn test_bursts_expire_independently() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, &config, Vec2::ZERO, PaletteColor::Red);
        for _ in 0..10 {
            update_particles(&mut particles);
        }
        spawn_burst(&mut particles, &mut rng, &config, Vec2::ZERO, PaletteColor::Blue);
        assert_eq!(particles.len(), 40);

        for _ in 0..20 {
            update_particles(&mut particles);
        }
        assert_eq!(particles.len(), 20);
        assert!(particles.iter().all(|p| p.color == PaletteColor::Blue));
    }
}
