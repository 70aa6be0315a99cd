//! Ray-based hit testing between projectiles and asteroid bounding spheres
//!
//! Resolution works over slices borrowed from `GameState` for exactly one
//! frame; there is no shared registry of rays. Each projectile casts along
//! its direction of travel, bounded by the distance it covers this tick, and
//! claims at most one asteroid. An asteroid already claimed this frame is
//! skipped by later projectiles, so every entity is removed by at most one
//! collision event per frame.

use glam::Vec3;

use super::state::{Asteroid, Projectile};
use crate::consts::ASTEROID_RADIUS;

/// A resolved projectile/asteroid intersection
#[derive(Debug, Clone)]
pub struct HitEvent {
    pub projectile_id: u32,
    pub asteroid_id: u32,
    /// Intersection point on the asteroid's bounding sphere
    pub point: Vec3,
    /// Distance from the projectile to the intersection
    pub distance: f32,
}

/// Nearest intersection of a ray with a sphere, if any.
///
/// `dir` must be a unit vector. Returns the smallest non-negative `t` such
/// that `origin + t * dir` lies on the sphere. A ray starting inside the
/// sphere reports the exit point.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t_near = -b - sqrt_disc;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sqrt_disc;
    if t_far >= 0.0 {
        return Some(t_far);
    }
    None
}

/// Resolve all projectile/asteroid hits for one tick.
///
/// Projectiles are processed in slice order (ascending id); each takes its
/// nearest intersected asteroid within this tick's travel distance. First
/// match wins: a claimed asteroid is invisible to later projectiles, which
/// fall through to their next-nearest target.
pub fn resolve_hits(projectiles: &[Projectile], asteroids: &[Asteroid], dt: f32) -> Vec<HitEvent> {
    let mut hits: Vec<HitEvent> = Vec::new();
    let mut claimed: Vec<u32> = Vec::new();

    for projectile in projectiles {
        let max_range = projectile.speed * dt;
        let mut nearest: Option<HitEvent> = None;

        for asteroid in asteroids {
            if claimed.contains(&asteroid.id) {
                continue;
            }
            let Some(t) = ray_sphere(projectile.pos, projectile.dir, asteroid.pos, ASTEROID_RADIUS)
            else {
                continue;
            };
            if t > max_range {
                continue;
            }
            if nearest.as_ref().is_none_or(|h| t < h.distance) {
                nearest = Some(HitEvent {
                    projectile_id: projectile.id,
                    asteroid_id: asteroid.id,
                    point: projectile.pos + projectile.dir * t,
                    distance: t,
                });
            }
        }

        if let Some(hit) = nearest {
            claimed.push(hit.asteroid_id);
            hits.push(hit);
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PROJECTILE_SPEED;

    fn projectile(id: u32, pos: Vec3, dir: Vec3) -> Projectile {
        Projectile {
            id,
            pos,
            dir,
            speed: PROJECTILE_SPEED,
        }
    }

    fn asteroid(id: u32, pos: Vec3) -> Asteroid {
        Asteroid {
            id,
            pos,
            speed: 5.0,
            size: 30.0,
        }
    }

    #[test]
    fn test_ray_sphere_head_on() {
        let t = ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -2.0), 0.5);
        assert!((t.unwrap() - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_ray_sphere_miss() {
        // Sphere is behind the ray origin
        assert!(ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 3.0), 0.5).is_none());
        // Sphere is off to the side beyond its radius
        assert!(ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(2.0, 0.0, -5.0), 0.5).is_none());
    }

    #[test]
    fn test_ray_sphere_inside_reports_exit() {
        let t = ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO, 0.5);
        assert!((t.unwrap() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_hit_within_tick_travel_only() {
        let projectiles = [projectile(1, Vec3::ZERO, Vec3::NEG_Z)];
        // Far asteroid sits on the ray but outside one tick of travel
        let far = [asteroid(2, Vec3::new(0.0, 0.0, -10.0))];
        assert!(resolve_hits(&projectiles, &far, 1.0 / 120.0).is_empty());

        // Close asteroid is within reach
        let near = [asteroid(3, Vec3::new(0.0, 0.0, -0.3))];
        let hits = resolve_hits(&projectiles, &near, 1.0 / 120.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].asteroid_id, 3);
    }

    #[test]
    fn test_nearest_asteroid_wins() {
        let projectiles = [projectile(1, Vec3::ZERO, Vec3::NEG_Z)];
        let asteroids = [
            asteroid(2, Vec3::new(0.0, 0.0, -0.4)),
            asteroid(3, Vec3::new(0.0, 0.0, -0.2)),
        ];
        // Generous dt so both are in range
        let hits = resolve_hits(&projectiles, &asteroids, 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].asteroid_id, 3);
    }

    #[test]
    fn test_claimed_asteroid_skipped_by_later_projectile() {
        // Two projectiles converging on the same pair of asteroids
        let projectiles = [
            projectile(1, Vec3::ZERO, Vec3::NEG_Z),
            projectile(2, Vec3::new(0.01, 0.0, 0.0), Vec3::NEG_Z),
        ];
        let asteroids = [
            asteroid(3, Vec3::new(0.0, 0.0, -0.2)),
            asteroid(4, Vec3::new(0.0, 0.0, -0.5)),
        ];
        let hits = resolve_hits(&projectiles, &asteroids, 1.0);
        assert_eq!(hits.len(), 2);
        // First projectile claims the nearest; the second falls through
        assert_eq!(hits[0].projectile_id, 1);
        assert_eq!(hits[0].asteroid_id, 3);
        assert_eq!(hits[1].projectile_id, 2);
        assert_eq!(hits[1].asteroid_id, 4);
    }

    #[test]
    fn test_one_hit_per_projectile() {
        let projectiles = [projectile(1, Vec3::ZERO, Vec3::NEG_Z)];
        let asteroids = [
            asteroid(2, Vec3::new(0.0, 0.0, -0.2)),
            asteroid(3, Vec3::new(0.0, 0.0, -0.5)),
        ];
        let hits = resolve_hits(&projectiles, &asteroids, 1.0);
        assert_eq!(hits.len(), 1);
    }
}
