//! Electron shell layout for the Bohr atom view
//!
//! Partitions Z electrons into up to 7 concentric shells by raw capacity and
//! assigns each electron an orbit radius, starting angle, angular speed and a
//! per-shell orbit-plane tilt. The fill order is a deliberate visual
//! simplification (shells fill to capacity in sequence, not in quantum
//! subshell order) and the layout is fully deterministic: the same Z always
//! produces the same electron sequence.

use glam::{Mat3, Vec3};

/// Maximum electrons per shell, innermost first.
pub const SHELL_CAPACITIES: [u32; 7] = [2, 8, 18, 32, 32, 18, 8];

/// Hard cap on emitted electrons; excess Z beyond shell capacity is dropped.
pub const MAX_ELECTRONS: usize = 120;

/// Orbit radius of the innermost shell.
pub const BASE_RADIUS: f32 = 6.0;

/// Radial distance between consecutive shells.
pub const RADIUS_STEP: f32 = 3.0;

/// Angular speed of the first electron of the innermost shell, degrees/tick.
pub const BASE_SPEED: f32 = 1.5;

/// One electron on a tilted circular orbit.
///
/// Only `angle` changes after generation; everything else is fixed by the
/// electron's shell and slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Electron {
    pub radius: f32,
    /// Current angle along the orbit, degrees
    pub angle: f32,
    /// Degrees advanced per animation tick
    pub speed: f32,
    /// Orbit-plane tilt about the X axis, degrees
    pub tilt_x: f32,
    /// Orbit-plane tilt about the Y axis, degrees
    pub tilt_y: f32,
}

impl Electron {
    /// Advance one animation tick, wrapping past 360 degrees.
    pub fn advance(&mut self) {
        self.angle += self.speed;
        if self.angle > 360.0 {
            self.angle -= 360.0;
        }
    }

    /// Rotation carrying the flat orbit circle into its tilted plane.
    fn orbit_basis(&self) -> Mat3 {
        Mat3::from_rotation_x(self.tilt_x.to_radians())
            * Mat3::from_rotation_y(self.tilt_y.to_radians())
    }

    /// Current 3D position on the tilted orbit.
    pub fn position(&self) -> Vec3 {
        // Tilt first, then the orbit angle about the plane's own Y axis
        Mat3::from_rotation_x(self.tilt_x.to_radians())
            * Mat3::from_rotation_y((self.tilt_y + self.angle).to_radians())
            * Vec3::new(self.radius, 0.0, 0.0)
    }

    /// Point on the orbit ring at parameter `t` radians, for drawing the ring.
    pub fn orbit_point(&self, t: f32) -> Vec3 {
        self.orbit_basis() * Vec3::new(self.radius * t.cos(), 0.0, self.radius * t.sin())
    }
}

fn shell_tilt(shell: usize) -> (f32, f32) {
    let s = shell as f32;
    let tilt_x = if shell % 2 == 0 { 25.0 + 5.0 * s } else { -30.0 + 5.0 * s };
    let tilt_y = if shell % 3 == 0 { 0.0 } else { 20.0 - 5.0 * s };
    (tilt_x, tilt_y)
}

/// Build the electron set for atomic number `z`.
///
/// Shells fill in order until `z` electrons are placed; electrons within a
/// shell start evenly spaced and each gets a slightly different speed so the
/// spacing drifts once animated.
pub fn shell_layout(z: u32) -> Vec<Electron> {
    let mut electrons = Vec::with_capacity(z.min(MAX_ELECTRONS as u32) as usize);
    let mut remaining = z;

    for (shell, &capacity) in SHELL_CAPACITIES.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        let count = remaining.min(capacity);
        remaining -= count;

        let radius = BASE_RADIUS + shell as f32 * RADIUS_STEP;
        let (tilt_x, tilt_y) = shell_tilt(shell);

        for i in 0..count {
            if electrons.len() >= MAX_ELECTRONS {
                return electrons;
            }
            electrons.push(Electron {
                radius,
                angle: 360.0 * i as f32 / count as f32,
                speed: BASE_SPEED + 0.15 * shell as f32 + 0.02 * i as f32,
                tilt_x,
                tilt_y,
            });
        }
    }

    electrons
}

/// Electron count per occupied shell for `z`, innermost first.
///
/// Same partition as [`shell_layout`]; used by the info overlay.
pub fn shell_counts(z: u32) -> Vec<u32> {
    let mut counts = Vec::new();
    let mut remaining = z;
    for &capacity in &SHELL_CAPACITIES {
        if remaining == 0 {
            break;
        }
        let count = remaining.min(capacity);
        counts.push(count);
        remaining -= count;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_shell(electrons: &[Electron]) -> Vec<usize> {
        let mut counts: Vec<usize> = Vec::new();
        let mut last_radius = f32::NEG_INFINITY;
        for e in electrons {
            if e.radius > last_radius {
                counts.push(0);
                last_radius = e.radius;
            }
            *counts.last_mut().unwrap() += 1;
        }
        counts
    }

    #[test]
    fn every_element_gets_z_electrons() {
        for z in 1..=118u32 {
            let electrons = shell_layout(z);
            assert_eq!(electrons.len(), z as usize, "Z={}", z);
        }
    }

    #[test]
    fn shells_fill_by_capacity_in_order() {
        for z in 1..=118u32 {
            let counts = per_shell(&shell_layout(z));
            let mut remaining = z;
            for (shell, &count) in counts.iter().enumerate() {
                let expected = remaining.min(SHELL_CAPACITIES[shell]);
                assert_eq!(count as u32, expected, "Z={} shell {}", z, shell);
                remaining -= expected;
            }
            assert_eq!(remaining, 0, "Z={}", z);
        }
    }

    #[test]
    fn hydrogen_layout() {
        let electrons = shell_layout(1);
        assert_eq!(electrons.len(), 1);
        let e = electrons[0];
        assert_eq!(e.radius, 6.0);
        assert_eq!(e.angle, 0.0);
        assert_eq!(e.speed, BASE_SPEED);
    }

    #[test]
    fn neon_angles_evenly_spaced() {
        let electrons = shell_layout(10);
        assert_eq!(electrons.len(), 10);
        // Shell 0: two electrons opposite each other
        assert_eq!(electrons[0].angle, 0.0);
        assert_eq!(electrons[1].angle, 180.0);
        // Shell 1: eight electrons at 45-degree steps
        for i in 0..8 {
            assert_eq!(electrons[2 + i].angle, 45.0 * i as f32);
        }
    }

    #[test]
    fn speeds_grow_with_shell_and_slot() {
        let electrons = shell_layout(12);
        // Third shell starts at index 10 (2 + 8)
        let e = electrons[11];
        let expected = BASE_SPEED + 0.15 * 2.0 + 0.02;
        assert!((e.speed - expected).abs() < 1e-6);
        for e in &electrons {
            assert!(e.speed > 0.0);
        }
    }

    #[test]
    fn tilts_alternate_per_shell() {
        let electrons = shell_layout(118);
        // Shell 0: even, divisible by 3
        assert_eq!(electrons[0].tilt_x, 25.0);
        assert_eq!(electrons[0].tilt_y, 0.0);
        // Shell 1: odd, not divisible by 3
        assert_eq!(electrons[2].tilt_x, -25.0);
        assert_eq!(electrons[2].tilt_y, 15.0);
        // Shell 3: odd, divisible by 3
        let shell3 = electrons.iter().find(|e| e.radius == 15.0).unwrap();
        assert_eq!(shell3.tilt_x, -15.0);
        assert_eq!(shell3.tilt_y, 0.0);
    }

    #[test]
    fn deterministic_for_same_z() {
        assert_eq!(shell_layout(47), shell_layout(47));
    }

    #[test]
    fn advance_wraps_past_full_turn() {
        let mut e = shell_layout(1)[0];
        for _ in 0..241 {
            e.advance();
        }
        // 241 ticks at 1.5 deg/tick is 361.5 degrees, wrapped once
        assert!((e.angle - 1.5).abs() < 1e-3);
    }

    #[test]
    fn position_stays_on_orbit_radius() {
        let mut electrons = shell_layout(54);
        for _ in 0..7 {
            for e in electrons.iter_mut() {
                e.advance();
            }
        }
        for e in &electrons {
            assert!((e.position().length() - e.radius).abs() < 1e-3);
            assert!((e.orbit_point(1.234).length() - e.radius).abs() < 1e-3);
        }
    }

    #[test]
    fn shell_counts_match_layout() {
        for z in [1u32, 10, 26, 71, 118] {
            let counts = shell_counts(z);
            let layout = per_shell(&shell_layout(z));
            assert_eq!(counts.len(), layout.len(), "Z={}", z);
            for (a, b) in counts.iter().zip(&layout) {
                assert_eq!(*a as usize, *b, "Z={}", z);
            }
        }
    }
}
