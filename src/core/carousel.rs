//! Ring geometry and the spring that animates the ring's rotation.
//!
//! Selection state picks a target rotation; the spring only interpolates
//! toward it. Nothing here writes back into the selection.

/// Cards whose depth falls below this are facing away and not drawn.
pub const BACKFACE_THRESHOLD: f64 = -0.35;

/// Distance from target, in degrees, below which the spring may rest.
pub const REST_DELTA: f64 = 0.01;
/// Speed, in degrees per second, below which the spring may rest.
pub const REST_SPEED: f64 = 0.01;

/// Integration substep.
pub const SUBSTEP_SECS: f64 = 0.001;

/// Whether semi-implicit Euler at [`SUBSTEP_SECS`] stays bounded for these
/// constants: `(k*h^2 + 2*c*h) / m < 4`.
pub fn is_stable(stiffness: f64, damping: f64, mass: f64) -> bool {
    let h = SUBSTEP_SECS;
    (stiffness * h * h + 2.0 * damping * h) / mass < 4.0
}

/// Angular offset of ring slot `position`, in degrees.
pub fn slot_angle(position: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    360.0 / count as f64 * position as f64
}

/// Ring rotation that brings persona `index` to the front.
pub fn target_rotation(index: usize, count: usize) -> f64 {
    -slot_angle(index, count)
}

/// Where a card sits on the ring for a given rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// Persona position in the roster.
    pub index: usize,
    /// Effective angle in degrees, normalized to `(-180, 180]`.
    pub angle: f64,
    /// Horizontal offset from the ring center, `-1.0..=1.0`.
    pub lateral: f64,
    /// Facing toward the viewer, `1.0` front to `-1.0` back.
    pub depth: f64,
}

impl CardPose {
    pub fn is_visible(&self) -> bool {
        self.depth >= BACKFACE_THRESHOLD
    }
}

/// Normalize degrees to `(-180, 180]`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Poses for every persona, ordered back to front for painting.
pub fn ring_poses(rotation: f64, count: usize) -> Vec<CardPose> {
    let mut poses: Vec<CardPose> = (0..count)
        .map(|index| {
            let angle = normalize_degrees(slot_angle(index, count) + rotation);
            let radians = angle.to_radians();
            CardPose {
                index,
                angle,
                lateral: radians.sin(),
                depth: radians.cos(),
            }
        })
        .collect();

    poses.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    poses
}

/// Damped spring driving the ring rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub position: f64,
    pub velocity: f64,
    pub target: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(260.0, 20.0, 1.0)
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    /// Start at rest on `target`.
    pub fn at_rest(mut self, target: f64) -> Self {
        self.position = target;
        self.target = target;
        self.velocity = 0.0;
        self
    }

    /// Move the target; position and velocity carry over.
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to the target with no motion.
    pub fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance by `dt` seconds. Returns true while still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            self.snap();
            return false;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let displacement = self.position - self.target;
            let force = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if !self.position.is_finite() || !self.velocity.is_finite() {
            log::warn!("Spring diverged toward {}; snapping", self.target);
            self.snap();
            return false;
        }

        if self.is_settled() {
            self.snap();
            false
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_slot_angles_for_four() {
        let angles: Vec<f64> = (0..4).map(|i| slot_angle(i, 4)).collect();
        assert_eq!(angles, [0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn test_slot_angle_empty_roster() {
        assert_eq!(slot_angle(3, 0), 0.0);
        assert_eq!(target_rotation(3, 0), 0.0);
    }

    #[test]
    fn test_target_rotation_brings_index_front() {
        for index in 0..4 {
            let rotation = target_rotation(index, 4);
            let poses = ring_poses(rotation, 4);
            let front = poses.last().unwrap();
            assert_eq!(front.index, index);
            assert!((front.depth - 1.0).abs() < EPS);
            assert!(front.lateral.abs() < EPS);
        }
    }

    #[test]
    fn test_target_rotation_is_pure() {
        assert_eq!(target_rotation(2, 4), target_rotation(2, 4));
        assert_eq!(target_rotation(2, 4), -180.0);
    }

    #[test]
    fn test_ring_poses_include_every_card() {
        let poses = ring_poses(-45.0, 4);
        let mut indices: Vec<usize> = poses.iter().map(|p| p.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn test_ring_poses_sorted_back_to_front() {
        let poses = ring_poses(-30.0, 4);
        for pair in poses.windows(2) {
            assert!(pair[0].depth <= pair[1].depth);
        }
    }

    #[test]
    fn test_back_card_hidden() {
        let poses = ring_poses(0.0, 4);
        let back = poses.iter().find(|p| p.index == 2).unwrap();
        assert!(!back.is_visible());
        let side = poses.iter().find(|p| p.index == 1).unwrap();
        assert!(side.is_visible());
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(270.0), -90.0);
        assert_eq!(normalize_degrees(-270.0), 90.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::default();
        spring.retarget(-90.0);
        let mut steps = 0;
        while spring.step(1.0 / 60.0) {
            steps += 1;
            assert!(steps < 600, "spring failed to settle");
        }
        assert_eq!(spring.position, -90.0);
        assert_eq!(spring.velocity, 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_at_rest_does_not_move() {
        let mut spring = Spring::default().at_rest(-180.0);
        assert!(!spring.step(0.1));
        assert_eq!(spring.position, -180.0);
    }

    #[test]
    fn test_retarget_preserves_motion() {
        let mut spring = Spring::default();
        spring.retarget(-90.0);
        spring.step(0.05);
        let (position, velocity) = (spring.position, spring.velocity);
        assert!(velocity != 0.0);

        spring.retarget(-180.0);
        assert_eq!(spring.position, position);
        assert_eq!(spring.velocity, velocity);
        assert_eq!(spring.target, -180.0);
    }

    #[test]
    fn test_snap() {
        let mut spring = Spring::default();
        spring.retarget(-270.0);
        spring.step(0.01);
        spring.snap();
        assert_eq!(spring.position, -270.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_default_spring_is_stable() {
        let spring = Spring::default();
        assert!(is_stable(spring.stiffness, spring.damping, spring.mass));
        assert!(!is_stable(260.0, 20.0, 0.001));
        assert!(!is_stable(5_000_000.0, 0.0, 1.0));
    }

    #[test]
    fn test_diverging_spring_snaps_to_target() {
        let mut spring = Spring::new(260.0, 20.0, 0.001);
        spring.retarget(target_rotation(1, 4));
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.position.is_finite());
        assert_eq!(spring.position, -90.0);
        assert_eq!(spring.velocity, 0.0);
        assert!(spring.is_settled());
        assert!(!spring.step(1.0 / 60.0));
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut spring = Spring::default();
        spring.retarget(-90.0);
        spring.step(-1.0);
        assert_eq!(spring.position, 0.0);
    }
}
