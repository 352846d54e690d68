use super::types::Direction;

/// Minimum swipe length, in pixels, before a touch gesture counts as a move.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Arrow key names, WASD, or a plain direction word.
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key.trim() {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        other => Direction::from_name(other),
    }
}

/// Decodes a swipe from its start and end points (screen coordinates, y grows
/// downward). Swipes shorter than `threshold` on both axes are ignored.
pub fn direction_from_swipe(start: (f32, f32), end: (f32, f32), threshold: f32) -> Option<Direction> {
    let distance_x = start.0 - end.0;
    let distance_y = start.1 - end.1;

    if distance_x.abs() < threshold && distance_y.abs() < threshold {
        return None;
    }

    if distance_x.abs() > distance_y.abs() {
        if distance_x > 0.0 {
            Some(Direction::Left)
        } else {
            Some(Direction::Right)
        }
    } else if distance_y > 0.0 {
        Some(Direction::Up)
    } else {
        Some(Direction::Down)
    }
}
