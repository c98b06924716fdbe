//! Unitarity, identity-at-zero and subspace-locality checks for every gate
//! family, over a fixed angle grid and over arbitrary angles.

use proptest::prelude::*;
use qutrit_gates::{
    Level, PhaseLevel, Subspace, UNITARITY_TOLERANCE, Unitary3x3, arbitrary_rotation,
    phase_level, phase_subspace, rotation_x, rotation_y,
};
use std::f64::consts::PI;

/// Angles that tend to expose sign and periodicity mistakes.
fn edge_angles() -> Vec<f64> {
    let mut angles = vec![
        0.0,
        PI / 4.0,
        PI / 2.0,
        PI,
        -PI,
        1.5 * PI,
        2.0 * PI,
        -2.0 * PI,
        4.0 * PI,
        1e-12,
        -0.3,
        100.0 * PI,
        -1001.0 * PI,
        12345.678,
    ];
    angles.extend((0..64_i32).map(|k| -4.0 * PI + f64::from(k) * PI / 8.0));
    angles
}

fn all_elementary(angle: f64) -> Vec<(String, Unitary3x3)> {
    let mut gates = Vec::new();
    for subspace in Subspace::ALL {
        gates.push((format!("x{subspace}"), rotation_x(subspace, angle)));
        gates.push((format!("y{subspace}"), rotation_y(subspace, angle)));
        gates.push((format!("z{subspace}"), phase_subspace(subspace, angle)));
    }
    for level in [PhaseLevel::L0, PhaseLevel::L2] {
        gates.push((format!("p{level}"), phase_level(level, angle)));
    }
    gates
}

// ---------------------------------------------------------------------------
// Angle grid
// ---------------------------------------------------------------------------

#[test]
fn elementary_gates_are_unitary_on_grid() {
    for angle in edge_angles() {
        for (name, m) in all_elementary(angle) {
            assert!(
                m.is_unitary(UNITARITY_TOLERANCE),
                "{name}({angle}) not unitary, error {}",
                m.unitarity_error()
            );
        }
    }
}

#[test]
fn composite_gates_are_unitary_on_grid() {
    let angles = edge_angles();
    for subspace in Subspace::ALL {
        for (i, &theta) in angles.iter().enumerate() {
            let pl = angles[(i + 3) % angles.len()];
            let pr = angles[(i + 7) % angles.len()];
            let vp = angles[(i + 11) % angles.len()];
            let m = arbitrary_rotation(subspace, theta, pl, pr, vp);
            assert!(
                m.is_unitary(UNITARITY_TOLERANCE),
                "r{subspace}({theta}, {pl}, {pr}, {vp}) not unitary"
            );
        }
    }
}

#[test]
fn subspace_gates_leave_spectator_exactly_alone_on_grid() {
    for angle in edge_angles() {
        for subspace in Subspace::ALL {
            let spectator = subspace.spectator();
            assert!(rotation_x(subspace, angle).acts_trivially_on(spectator));
            assert!(rotation_y(subspace, angle).acts_trivially_on(spectator));
            assert!(phase_subspace(subspace, angle).acts_trivially_on(spectator));
        }
    }
}

#[test]
fn level_phases_touch_only_their_level() {
    for angle in edge_angles() {
        let m0 = phase_level(PhaseLevel::L0, angle);
        assert!(m0.acts_trivially_on(Level::Excited));
        assert!(m0.acts_trivially_on(Level::Higher));

        let m2 = phase_level(PhaseLevel::L2, angle);
        assert!(m2.acts_trivially_on(Level::Ground));
        assert!(m2.acts_trivially_on(Level::Excited));
    }
}

#[test]
fn zero_parameters_give_identity() {
    for (name, m) in all_elementary(0.0) {
        assert!(m.is_identity(f64::EPSILON), "{name}(0) is not the identity");
    }
    for subspace in Subspace::ALL {
        assert!(arbitrary_rotation(subspace, 0.0, 0.0, 0.0, 0.0).is_identity(f64::EPSILON));
    }
}

#[test]
fn full_turn_keeps_sign_flip_on_active_levels() {
    for subspace in Subspace::ALL {
        let (lo, hi) = subspace.active();
        for m in [rotation_x(subspace, 2.0 * PI), rotation_y(subspace, 2.0 * PI)] {
            assert!((m[(lo, lo)].re + 1.0).abs() < 1e-12);
            assert!((m[(hi, hi)].re + 1.0).abs() < 1e-12);
            assert!(!m.is_identity(1e-6));
        }
        // Two full turns close the cover.
        assert!(rotation_x(subspace, 4.0 * PI).is_identity(1e-12));
    }
}

// ---------------------------------------------------------------------------
// Arbitrary angles
// ---------------------------------------------------------------------------

fn angle() -> impl Strategy<Value = f64> {
    prop_oneof![
        -10.0 * PI..10.0 * PI,
        -1.0e4..1.0e4,
        (-1000_i32..1000).prop_map(|k| f64::from(k) * PI),
    ]
}

fn subspace() -> impl Strategy<Value = Subspace> {
    prop_oneof![Just(Subspace::S01), Just(Subspace::S12)]
}

proptest! {
    #[test]
    fn prop_elementary_unitary_and_local(a in angle(), s in subspace()) {
        for m in [rotation_x(s, a), rotation_y(s, a), phase_subspace(s, a)] {
            prop_assert!(m.is_unitary(UNITARITY_TOLERANCE));
            prop_assert!(m.acts_trivially_on(s.spectator()));
        }
        prop_assert!(phase_level(PhaseLevel::L0, a).is_unitary(UNITARITY_TOLERANCE));
        prop_assert!(phase_level(PhaseLevel::L2, a).is_unitary(UNITARITY_TOLERANCE));
    }

    #[test]
    fn prop_composite_unitary(
        s in subspace(),
        theta in angle(),
        pl in angle(),
        pr in angle(),
        vp in angle(),
    ) {
        let m = arbitrary_rotation(s, theta, pl, pr, vp);
        prop_assert!(m.is_unitary(UNITARITY_TOLERANCE), "error {}", m.unitarity_error());
    }

    #[test]
    fn prop_inverse_angle_undoes_rotation(a in angle(), s in subspace()) {
        prop_assert!((rotation_x(s, a) * rotation_x(s, -a)).is_identity(1e-9));
        prop_assert!((rotation_y(s, a) * rotation_y(s, -a)).is_identity(1e-9));
        prop_assert!((phase_subspace(s, a) * phase_subspace(s, -a)).is_identity(1e-9));
    }

    #[test]
    fn prop_dagger_is_inverse(s in subspace(), theta in angle(), pl in angle()) {
        let m = arbitrary_rotation(s, theta, pl, 0.4, -0.7);
        prop_assert!((m.dagger() * m).is_identity(1e-9));
        prop_assert!((m * m.dagger()).is_identity(1e-9));
    }
}
