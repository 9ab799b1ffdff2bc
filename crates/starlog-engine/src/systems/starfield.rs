//! 2D starfield behind the site content: static stars with mouse parallax
//! on one canvas and fast streaks on another.

use std::f32::consts::TAU;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::renderer::traits::{rgba, Canvas2D};
use super::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub static_stars: usize,
    pub fast_particles: usize,
    /// Pointer offset from the canvas center is divided by this.
    pub parallax_divisor: f32,
    pub max_star_radius: f32,
    pub min_star_alpha: f32,
    pub particle_length: [f32; 2],
    pub particle_speed: [f32; 2],
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            static_stars: 300,
            fast_particles: 100,
            parallax_divisor: 40.0,
            max_star_radius: 1.2,
            min_star_alpha: 0.3,
            particle_length: [10.0, 30.0],
            particle_speed: [2.0, 7.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticStar {
    pub position: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FastParticle {
    pub position: Vec2,
    pub length: f32,
    /// Pixels moved left per frame.
    pub speed: f32,
}

pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<StaticStar>,
    particles: Vec<FastParticle>,
    pointer: Vec2,
    rng: Rng,
}

impl Starfield {
    /// Scatter stars and particles over a `width` x `height` viewport.
    pub fn new(config: StarfieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let stars = (0..config.static_stars)
            .map(|_| StaticStar {
                position: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
                radius: rng.range(0.0, config.max_star_radius),
                alpha: rng.range(config.min_star_alpha, 1.0),
            })
            .collect();
        let particles = (0..config.fast_particles)
            .map(|_| FastParticle {
                position: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
                length: rng.range(config.particle_length[0], config.particle_length[1]),
                speed: rng.range(config.particle_speed[0], config.particle_speed[1]),
            })
            .collect();
        Self {
            config,
            stars,
            particles,
            pointer: Vec2::ZERO,
            rng,
        }
    }

    /// Last known pointer position in client pixels.
    pub fn set_pointer(&mut self, client: Vec2) {
        self.pointer = client;
    }

    pub fn stars(&self) -> &[StaticStar] {
        &self.stars
    }

    pub fn particles(&self) -> &[FastParticle] {
        &self.particles
    }

    /// Parallax shift of the static layer for a canvas of `size`.
    pub fn parallax_offset(&self, size: Vec2) -> Vec2 {
        (self.pointer - size * 0.5) / self.config.parallax_divisor
    }

    /// Move every streak left; those past the left edge re-enter at the
    /// right edge at a random height.
    pub fn advance(&mut self, width: f32, height: f32) {
        for p in &mut self.particles {
            p.position.x -= p.speed;
            if p.position.x < 0.0 {
                p.position.x = width;
                p.position.y = self.rng.range(0.0, height);
            }
        }
    }

    /// Redraw the static layer.
    pub fn draw_stars<C: Canvas2D + ?Sized>(&self, canvas: &mut C) {
        let (w, h) = (canvas.width(), canvas.height());
        canvas.clear_rect(0.0, 0.0, w, h);
        let offset = self.parallax_offset(Vec2::new(w, h));
        for star in &self.stars {
            let at = star.position + offset;
            canvas.begin_path();
            canvas.arc(at.x, at.y, star.radius, 0.0, TAU);
            canvas.set_fill_style(&rgba(224, 224, 224, star.alpha));
            canvas.fill();
        }
    }

    /// Advance the streaks and redraw them.
    pub fn draw_particles<C: Canvas2D + ?Sized>(&mut self, canvas: &mut C) {
        let (w, h) = (canvas.width(), canvas.height());
        canvas.clear_rect(0.0, 0.0, w, h);
        canvas.set_stroke_style(&rgba(255, 255, 255, 0.5));
        self.advance(w, h);
        for p in &self.particles {
            canvas.begin_path();
            canvas.move_to(p.position.x, p.position.y);
            canvas.line_to(p.position.x + p.length, p.position.y);
            canvas.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::traits::recording::RecordingCanvas;

    #[test]
    fn generated_values_stay_in_range() {
        let field = Starfield::new(StarfieldConfig::default(), 800.0, 600.0, 3);
        assert_eq!(field.stars().len(), 300);
        assert_eq!(field.particles().len(), 100);
        for s in field.stars() {
            assert!(s.radius >= 0.0 && s.radius < 1.2);
            assert!(s.alpha >= 0.3 && s.alpha < 1.0);
            assert!(s.position.x < 800.0 && s.position.y < 600.0);
        }
        for p in field.particles() {
            assert!(p.length >= 10.0 && p.length < 30.0);
            assert!(p.speed >= 2.0 && p.speed < 7.0);
        }
    }

    #[test]
    fn parallax_follows_pointer() {
        let mut field = Starfield::new(StarfieldConfig::default(), 800.0, 600.0, 3);
        field.set_pointer(Vec2::new(400.0, 300.0));
        assert_eq!(field.parallax_offset(Vec2::new(800.0, 600.0)), Vec2::ZERO);
        field.set_pointer(Vec2::new(800.0, 0.0));
        assert_eq!(field.parallax_offset(Vec2::new(800.0, 600.0)), Vec2::new(10.0, -7.5));
    }

    #[test]
    fn particles_wrap_to_right_edge() {
        let config = StarfieldConfig { static_stars: 0, fast_particles: 20, ..Default::default() };
        let mut field = Starfield::new(config, 100.0, 50.0, 9);
        for _ in 0..200 {
            field.advance(100.0, 50.0);
            for p in field.particles() {
                assert!(p.position.x >= 0.0 && p.position.x <= 100.0);
                assert!(p.position.y >= 0.0 && p.position.y < 50.0);
            }
        }
    }

    #[test]
    fn particle_moves_by_its_speed() {
        let config = StarfieldConfig { static_stars: 0, fast_particles: 1, ..Default::default() };
        let mut field = Starfield::new(config, 10_000.0, 50.0, 1);
        field.particles[0].position.x = 5000.0;
        let speed = field.particles()[0].speed;
        field.advance(10_000.0, 50.0);
        assert!((field.particles()[0].position.x - (5000.0 - speed)).abs() < 1e-3);
    }

    #[test]
    fn draws_one_arc_per_star_and_one_line_per_particle() {
        let mut field = Starfield::new(StarfieldConfig::default(), 800.0, 600.0, 5);
        let mut stars = RecordingCanvas::new(800.0, 600.0);
        let mut streaks = RecordingCanvas::new(800.0, 600.0);
        field.draw_stars(&mut stars);
        field.draw_particles(&mut streaks);

        assert_eq!(stars.calls[0], "clear 0 0 800 600");
        assert_eq!(stars.count("arc"), 300);
        assert_eq!(stars.count("fill_style rgba(224, 224, 224,"), 300);
        assert_eq!(streaks.count("stroke_style rgba(255, 255, 255, 0.5)"), 1);
        assert_eq!(streaks.count("line"), 100);
        assert_eq!(streaks.count("stroke"), 101);
    }
}
