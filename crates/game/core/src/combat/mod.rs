//! Combat resolution between the two fighters.
//!
//! Hitbox geometry lives with the fighters and projectiles; this module only
//! decides which overlaps deal damage or cancel projectiles.

mod collision;

pub use collision::CollisionResolver;
