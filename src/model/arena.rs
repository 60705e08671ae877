//! Flat rectangular room with box obstacles.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Axis-aligned box, `(x, y)` is the lower-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.w),
            p.y.clamp(self.y, self.y + self.h),
        )
    }

    /// Entry distance along `dir` (slab test), `None` on a miss.
    fn ray_entry(&self, origin: Vec2, dir: Vec2) -> Option<f64> {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for (o, d, lo, hi) in [
            (origin.x, dir.x, self.x, self.x + self.w),
            (origin.y, dir.y, self.y, self.y + self.h),
        ] {
            if d.abs() < f64::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let (a, b) = ((lo - o) / d, (hi - o) / d);
            t_min = t_min.max(a.min(b));
            t_max = t_max.min(a.max(b));
        }

        if t_max < t_min.max(0.0) {
            return None;
        }
        Some(t_min.max(0.0))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub obstacles: Vec<Rect>,
}

impl Arena {
    #[must_use]
    pub fn new(width: f64, height: f64, obstacles: Vec<Rect>) -> Self {
        Self {
            width,
            height,
            obstacles,
        }
    }

    /// Distance from `origin` along unit `dir` to the first wall or obstacle,
    /// capped at `max`.
    #[must_use]
    pub fn raycast(&self, origin: Vec2, dir: Vec2, max: f64) -> f64 {
        let mut hit = max;

        for (o, d, extent) in [(origin.x, dir.x, self.width), (origin.y, dir.y, self.height)] {
            if d > 0.0 {
                hit = hit.min((extent - o) / d);
            } else if d < 0.0 {
                hit = hit.min(-o / d);
            }
        }

        for rect in &self.obstacles {
            if let Some(t) = rect.ray_entry(origin, dir) {
                hit = hit.min(t);
            }
        }

        hit.max(0.0)
    }

    /// Whether a disc of `radius` at `p` overlaps a wall or obstacle.
    #[must_use]
    pub fn is_blocked(&self, p: Vec2, radius: f64) -> bool {
        if p.x < radius || p.y < radius || p.x > self.width - radius || p.y > self.height - radius
        {
            return true;
        }
        self.obstacles
            .iter()
            .any(|r| (r.closest_point(p) - p).length() < radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Arena {
        Arena::new(20.0, 10.0, vec![Rect::new(12.0, 4.0, 2.0, 2.0)])
    }

    #[test]
    fn test_raycast_hits_walls() {
        let arena = Arena::new(20.0, 10.0, Vec::new());
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(arena.raycast(p, Vec2::FORWARD, 100.0), 5.0);
        assert_eq!(arena.raycast(p, -Vec2::RIGHT, 100.0), 5.0);
        assert_eq!(arena.raycast(p, Vec2::RIGHT, 100.0), 15.0);
        assert_eq!(arena.raycast(p, Vec2::RIGHT, 10.0), 10.0);
    }

    #[test]
    fn test_raycast_hits_obstacle() {
        let arena = room();
        assert_eq!(arena.raycast(Vec2::new(5.0, 5.0), Vec2::RIGHT, 100.0), 7.0);
        // Passes above the box.
        assert_eq!(arena.raycast(Vec2::new(5.0, 7.0), Vec2::RIGHT, 100.0), 15.0);
        // Box behind the ray origin is ignored.
        assert_eq!(arena.raycast(Vec2::new(16.0, 5.0), Vec2::RIGHT, 100.0), 4.0);
    }

    #[test]
    fn test_is_blocked() {
        let arena = room();
        assert!(!arena.is_blocked(Vec2::new(5.0, 5.0), 0.5));
        assert!(arena.is_blocked(Vec2::new(0.2, 5.0), 0.5));
        assert!(arena.is_blocked(Vec2::new(5.0, 9.8), 0.5));
        assert!(arena.is_blocked(Vec2::new(11.7, 5.0), 0.5));
        assert!(!arena.is_blocked(Vec2::new(11.4, 5.0), 0.5));
    }

    #[test]
    fn test_vec_ops() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.dot(Vec2::RIGHT), 3.0);
        assert_eq!(v * 2.0 - v, v);
    }
}
