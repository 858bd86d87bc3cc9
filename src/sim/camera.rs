//! Horizontal camera tracking

/// Scroll offset that centers the player, clamped so the viewport never
/// leaves the world
pub fn camera_offset(player_x: f32, viewport_width: f32, world_width: f32) -> f32 {
    let max_offset = (world_width - viewport_width).max(0.0);
    (player_x - viewport_width / 2.0).clamp(0.0, max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WORLD_WIDTH;
    use proptest::prelude::*;

    #[test]
    fn test_camera_pinned_at_start() {
        assert_eq!(camera_offset(50.0, 800.0, WORLD_WIDTH), 0.0);
    }

    #[test]
    fn test_camera_centers_player() {
        assert_eq!(camera_offset(1000.0, 800.0, WORLD_WIDTH), 600.0);
    }

    #[test]
    fn test_camera_pinned_at_end() {
        assert_eq!(camera_offset(1960.0, 800.0, WORLD_WIDTH), 1200.0);
    }

    #[test]
    fn test_viewport_wider_than_world() {
        assert_eq!(camera_offset(1500.0, 2400.0, WORLD_WIDTH), 0.0);
    }

    proptest! {
        #[test]
        fn camera_stays_in_range(x in -100.0f32..2100.0, width in 100.0f32..3000.0) {
            let offset = camera_offset(x, width, WORLD_WIDTH);
            prop_assert!(offset >= 0.0);
            prop_assert!(offset <= (WORLD_WIDTH - width).max(0.0));
        }
    }
}
