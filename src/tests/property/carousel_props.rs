//! Property-based tests for ring geometry and the rotation spring
//!
//! Tests invariants:
//! - The focused persona faces front at its target rotation
//! - Every persona has exactly one pose at any rotation
//! - The spring settles on any reachable target

use proptest::prelude::*;

use crate::core::carousel::{normalize_degrees, ring_poses, target_rotation, Spring};

proptest! {
    /// Property: target rotation puts the focused card at the front
    #[test]
    fn prop_target_faces_front(
        (count, index) in (1usize..=12).prop_flat_map(|count| (Just(count), 0..count))
    ) {
        let poses = ring_poses(target_rotation(index, count), count);
        let front = poses.last().unwrap();
        prop_assert_eq!(front.index, index);
        prop_assert!((front.depth - 1.0).abs() < 1e-9);
    }

    /// Property: one pose per persona, whatever the rotation
    #[test]
    fn prop_every_card_posed(count in 0usize..=12, rotation in -1080.0f64..1080.0) {
        let poses = ring_poses(rotation, count);
        prop_assert_eq!(poses.len(), count);
        let mut indices: Vec<usize> = poses.iter().map(|p| p.index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..count).collect::<Vec<_>>());
    }

    /// Property: normalized angles stay in (-180, 180]
    #[test]
    fn prop_normalize_range(angle in -10_000.0f64..10_000.0) {
        let n = normalize_degrees(angle);
        prop_assert!(n > -180.0 && n <= 180.0);
    }

    /// Property: the default spring settles on any ring target within 10s
    #[test]
    fn prop_spring_settles(
        (count, index) in (1usize..=8).prop_flat_map(|count| (Just(count), 0..count)),
        start in -360.0f64..0.0
    ) {
        let target = target_rotation(index, count);
        let mut spring = Spring::default().at_rest(start);
        spring.retarget(target);
        for _ in 0..600 {
            if !spring.step(1.0 / 60.0) {
                break;
            }
        }
        prop_assert!(spring.is_settled());
        prop_assert_eq!(spring.position, target);
    }
}
