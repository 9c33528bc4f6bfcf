//! Collision detection between the player box, the obstacle track and the
//! vertical world bounds.

use crate::obstacles::ObstacleTrack;
use crate::types::Rect;

/// True if `player` strictly overlaps any obstacle rectangle, or pokes out of
/// the top or bottom of the world.
///
/// Boxes that only touch along an edge are not a collision.
pub fn check_collision(player: &Rect, track: &ObstacleTrack, world_height: f32) -> bool {
    hits_obstacle(player, track) || out_of_bounds(player, world_height)
}

pub fn hits_obstacle(player: &Rect, track: &ObstacleTrack) -> bool {
    track
        .iter()
        .any(|pair| player.intersects(&pair.top) || player.intersects(&pair.bottom))
}

pub fn out_of_bounds(player: &Rect, world_height: f32) -> bool {
    player.y < 0.0 || player.bottom() > world_height
}
