use survivor_core::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOUSE_COOLDOWN: f32 = 240.0;

/// A discovered house, anchored to the grid cell that contains its center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct House {
    pub cell: usize,
    pub center: Vec2,
    pub cooldown: f32,
    /// Time spent unavailable so far. Only advances while the house is unavailable.
    pub elapsed: f32,
    pub available: bool,
}

impl House {
    pub fn new(center: Vec2, cell: usize) -> Self {
        Self::with_cooldown(center, cell, DEFAULT_HOUSE_COOLDOWN)
    }

    pub fn with_cooldown(center: Vec2, cell: usize, cooldown: f32) -> Self {
        Self {
            cell,
            center,
            cooldown,
            elapsed: 0.0,
            available: true,
        }
    }

    /// Mark the house as used. It stays unavailable until its cooldown has elapsed.
    pub fn occupy(&mut self) {
        self.available = false;
        self.elapsed = 0.0;
    }

    /// Advance the cooldown. Returns `true` on the call that makes the house available again.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.available {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.cooldown {
            return false;
        }

        self.available = true;
        self.elapsed = 0.0;
        true
    }
}
