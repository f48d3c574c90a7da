//! Verlet point masses and distance constraints.
//!
//! Velocity is never stored: it is the difference between the current and the
//! previous position. Constraints refer to their endpoints by index into the
//! point slice owned by the same body, so a body can be moved or cloned freely.

use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Smallest length used when normalising a constraint, guards against division by zero.
const MIN_CONSTRAINT_LENGTH: f32 = 1e-4;

/// A 2D vector in screen coordinates (+y points down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance to another point.
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// A point mass integrated with position Verlet.
///
/// A mass of zero marks a static anchor: forces and integration leave it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMass {
    /// Current position.
    pub position: Vec2,
    /// Position at the previous tick.
    pub old_position: Vec2,
    /// Acceleration accumulated since the last integration.
    pub acceleration: Vec2,
    /// Mass, zero for immovable anchors.
    pub mass: f32,
}

impl PointMass {
    /// Creates a point at rest.
    pub fn new(position: Vec2, mass: f32) -> Self {
        Self {
            position,
            old_position: position,
            acceleration: Vec2::ZERO,
            mass,
        }
    }

    /// Returns true for zero-mass anchors.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    /// Implicit velocity (displacement over the last tick).
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.old_position
    }

    /// Accumulates `force / mass` into the acceleration for this tick.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        if self.is_static() {
            return;
        }
        self.acceleration += force / self.mass;
    }

    /// Advances the point by one tick and clears the accumulated acceleration.
    ///
    /// The velocity term is deliberately not scaled by `dt` while the
    /// acceleration term is scaled by `dt²`; the tuned gait behaviour depends on it.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_static() {
            return;
        }
        let velocity = self.velocity();
        self.old_position = self.position;
        self.position += velocity + self.acceleration * (dt * dt);
        self.acceleration = Vec2::ZERO;
    }

    /// Places the point at `position` with zero velocity and no pending acceleration.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.old_position = position;
        self.acceleration = Vec2::ZERO;
    }
}

/// A distance constraint between two points of the same body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Index of the first endpoint.
    pub a: usize,
    /// Index of the second endpoint.
    pub b: usize,
    /// Rest length the constraint pulls towards.
    pub target_length: f32,
}

impl Constraint {
    /// Creates a constraint between points `a` and `b`.
    pub fn new(a: usize, b: usize, target_length: f32) -> Self {
        Self {
            a,
            b,
            target_length,
        }
    }

    /// Current distance between the endpoints.
    pub fn current_length(&self, points: &[PointMass]) -> f32 {
        points[self.a].position.distance(points[self.b].position)
    }

    /// Performs a single relaxation step.
    ///
    /// Each movable endpoint is moved by half of the length error along the
    /// constraint axis. One call does not converge; callers repeat it per tick.
    pub fn relax(&self, points: &mut [PointMass]) {
        let delta = points[self.b].position - points[self.a].position;
        let length = delta.length().max(MIN_CONSTRAINT_LENGTH);
        let difference = (length - self.target_length) / length;
        let correction = delta * 0.5 * difference;

        let first = &mut points[self.a];
        if !first.is_static() {
            first.position += correction;
        }
        let second = &mut points[self.b];
        if !second.is_static() {
            second.position -= correction;
        }
    }
}
