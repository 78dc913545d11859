//! Nucleon cluster layout for the Bohr atom view
//!
//! Derives a neutron count from a banded neutron/proton ratio, caps the
//! number of rendered nucleons for heavy elements, and scatters the drawn
//! nucleons uniformly through a small sphere. Placement is pseudo-random but
//! seeded from the atomic number, so the same element produces the identical
//! point cloud every time it is generated; the nucleus never needs to be
//! cached between frames or sessions.
//!
//! The ratio bands are a visual heuristic, not nuclide data.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

/// Upper bound on rendered nucleons; heavier elements draw a proportional
/// proton/neutron subset instead of hundreds of overlapping spheres.
pub const MAX_NUCLEONS_DRAWN: u32 = 60;

/// Nucleon positions for one element, protons first in generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct NucleusLayout {
    pub protons: Vec<Vec3>,
    pub neutrons: Vec<Vec3>,
}

/// Approximate neutron count for atomic number `z`.
///
/// Light nuclei sit near n/Z = 1, heavy ones near 1.5; hydrogen has none.
pub fn neutron_count(z: u32) -> u32 {
    if z == 1 {
        return 0;
    }
    let ratio = if z <= 20 {
        1.0
    } else if z <= 40 {
        1.2
    } else if z <= 82 {
        1.4
    } else {
        1.5
    };
    (ratio * z as f32) as u32
}

/// How many protons and neutrons actually get drawn for `z`.
///
/// When the full nucleon count exceeds [`MAX_NUCLEONS_DRAWN`] both species are
/// scaled down together so the visual proton:neutron ratio survives.
pub fn draw_counts(z: u32) -> (u32, u32) {
    let neutrons = neutron_count(z);
    let total = z + neutrons;
    if total > MAX_NUCLEONS_DRAWN {
        let protons = (z as f32 * MAX_NUCLEONS_DRAWN as f32 / total as f32) as u32;
        (protons, MAX_NUCLEONS_DRAWN - protons)
    } else {
        (z, neutrons)
    }
}

/// Radius of the nucleon cluster, growing slightly with Z.
pub fn cluster_radius(z: u32) -> f32 {
    3.0 + 0.01 * z as f32
}

/// Uniformly distributed point inside the unit sphere.
///
/// Cube-root radius correction keeps the volume density uniform rather than
/// clumping samples at the center.
fn sphere_sample(rng: &mut ChaCha8Rng) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let w: f32 = rng.gen();

    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).acos();
    let r = w.cbrt();

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Nucleus layout for `z` with the default seed (the atomic number itself).
pub fn nucleon_layout(z: u32) -> NucleusLayout {
    nucleon_layout_seeded(z, z as u64)
}

/// Nucleus layout with an explicit seed.
///
/// Protons and neutrons draw from the same stream, protons first, so the
/// entire point sequence is fixed by the seed.
pub fn nucleon_layout_seeded(z: u32, seed: u64) -> NucleusLayout {
    let (proton_count, neutron_count) = draw_counts(z);
    let radius = cluster_radius(z);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let protons = (0..proton_count)
        .map(|_| sphere_sample(&mut rng) * radius)
        .collect();
    let neutrons = (0..neutron_count)
        .map(|_| sphere_sample(&mut rng) * radius)
        .collect();

    NucleusLayout { protons, neutrons }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrogen_is_a_lone_proton() {
        assert_eq!(neutron_count(1), 0);
        assert_eq!(draw_counts(1), (1, 0));
        let layout = nucleon_layout(1);
        assert_eq!(layout.protons.len(), 1);
        assert!(layout.neutrons.is_empty());
    }

    #[test]
    fn neutron_ratio_bands() {
        assert_eq!(neutron_count(20), 20);
        assert_eq!(neutron_count(30), 36);
        assert_eq!(neutron_count(82), 114);
        assert_eq!(neutron_count(92), 138);
    }

    #[test]
    fn light_elements_draw_everything() {
        // Z=20: 20 + 20 nucleons, under the cap
        assert_eq!(draw_counts(20), (20, 20));
        let layout = nucleon_layout(20);
        assert_eq!(layout.protons.len(), 20);
        assert_eq!(layout.neutrons.len(), 20);
    }

    #[test]
    fn heavy_elements_respect_the_draw_cap() {
        for z in 1..=118u32 {
            let (p, n) = draw_counts(z);
            assert!(p + n <= MAX_NUCLEONS_DRAWN, "Z={}", z);
            if z + neutron_count(z) <= MAX_NUCLEONS_DRAWN {
                assert_eq!(p, z, "Z={} should draw all protons", z);
            } else {
                assert_eq!(p + n, MAX_NUCLEONS_DRAWN, "Z={} should fill the cap", z);
            }
        }
    }

    #[test]
    fn capped_counts_keep_the_species_ratio() {
        // Uranium: 92 + 138 = 230 nucleons, drawn as 24 + 36
        let (p, n) = draw_counts(92);
        assert_eq!(p, (92.0 * 60.0 / 230.0) as u32);
        assert_eq!(n, 60 - p);
    }

    #[test]
    fn same_seed_reproduces_the_point_cloud() {
        for z in [1u32, 8, 26, 79, 118] {
            assert_eq!(nucleon_layout(z), nucleon_layout(z), "Z={}", z);
        }
    }

    #[test]
    fn different_seeds_scatter_differently() {
        let a = nucleon_layout_seeded(26, 26);
        let b = nucleon_layout_seeded(26, 27);
        assert_ne!(a, b);
    }

    #[test]
    fn all_points_stay_inside_the_cluster() {
        for z in [1u32, 20, 54, 92, 118] {
            let radius = cluster_radius(z);
            let layout = nucleon_layout(z);
            for p in layout.protons.iter().chain(&layout.neutrons) {
                assert!(p.length() <= radius + 1e-4, "Z={} point {:?}", z, p);
            }
        }
    }
}
