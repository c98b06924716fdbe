//! Qutrit gate constructors.
//!
//! Elementary gates act on one two-level subspace (or one level) and leave the
//! remaining level exactly untouched. Composite rotations chain them in the
//! fixed order of the Fischer et al. (PRR 2021) decomposition.
//!
//! | Gate | Params | Matrix on active levels |
//! |------|--------|-------------------------|
//! | `x01`, `x12` | θ | `[[cos θ/2, -i sin θ/2], [-i sin θ/2, cos θ/2]]` |
//! | `y01`, `y12` | θ | `[[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]` |
//! | `z01`, `z12` | φ | `diag(e^(-iφ/2), e^(iφ/2))` |
//! | `p0`, `p2` | φ | `e^(iφ)` on level 0 or 2 |
//! | `r01` | θ, φ_l, φ_r, ϕ | `P2(ϕ) · P0(-φ_l) · X01(θ) · P0(φ_r)` |
//! | `r12` | θ, φ_l, φ_r, ϕ | `P0(ϕ) · P2(φ_l) · X12(θ) · P2(-φ_r)` |

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::error::{QutritError, QutritResult};
use crate::level::{PhaseLevel, Subspace};
use crate::unitary::Unitary3x3;

// ---------------------------------------------------------------------------
// Elementary gates
// ---------------------------------------------------------------------------

/// Rotation by `theta` about the effective X axis of `subspace`.
pub fn rotation_x(subspace: Subspace, theta: f64) -> Unitary3x3 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    Unitary3x3::embed(
        subspace,
        [
            Complex64::new(c, 0.0),
            Complex64::new(0.0, -s),
            Complex64::new(0.0, -s),
            Complex64::new(c, 0.0),
        ],
    )
}

/// Rotation by `theta` about the effective Y axis of `subspace`.
pub fn rotation_y(subspace: Subspace, theta: f64) -> Unitary3x3 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    Unitary3x3::embed(
        subspace,
        [
            Complex64::new(c, 0.0),
            Complex64::new(-s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(c, 0.0),
        ],
    )
}

/// Balanced relative phase on `subspace`: `e^(-iφ/2)` on the lower level,
/// `e^(iφ/2)` on the upper one.
pub fn phase_subspace(subspace: Subspace, phi: f64) -> Unitary3x3 {
    Unitary3x3::embed(
        subspace,
        [
            Complex64::from_polar(1.0, -phi / 2.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, phi / 2.0),
        ],
    )
}

/// Absolute phase `e^(iφ)` on a single level.
pub fn phase_level(level: PhaseLevel, varphi: f64) -> Unitary3x3 {
    let mut diag = [Complex64::new(1.0, 0.0); 3];
    diag[level.level().index()] = Complex64::from_polar(1.0, varphi);
    Unitary3x3::diagonal(diag)
}

/// X rotation on levels 0-1.
#[inline]
pub fn x01(theta: f64) -> Unitary3x3 {
    rotation_x(Subspace::S01, theta)
}

/// X rotation on levels 1-2.
#[inline]
pub fn x12(theta: f64) -> Unitary3x3 {
    rotation_x(Subspace::S12, theta)
}

/// Y rotation on levels 0-1.
#[inline]
pub fn y01(theta: f64) -> Unitary3x3 {
    rotation_y(Subspace::S01, theta)
}

/// Y rotation on levels 1-2.
#[inline]
pub fn y12(theta: f64) -> Unitary3x3 {
    rotation_y(Subspace::S12, theta)
}

/// Z phase on levels 0-1.
#[inline]
pub fn z01(phi: f64) -> Unitary3x3 {
    phase_subspace(Subspace::S01, phi)
}

/// Z phase on levels 1-2.
#[inline]
pub fn z12(phi: f64) -> Unitary3x3 {
    phase_subspace(Subspace::S12, phi)
}

/// Phase on level 0.
#[inline]
pub fn p0(varphi: f64) -> Unitary3x3 {
    phase_level(PhaseLevel::L0, varphi)
}

/// Phase on level 2.
#[inline]
pub fn p2(varphi: f64) -> Unitary3x3 {
    phase_level(PhaseLevel::L2, varphi)
}

// ---------------------------------------------------------------------------
// Composite gates
// ---------------------------------------------------------------------------

/// Arbitrary rotation on `subspace`, dressed with two level phases.
///
/// For `S01` this is `P2(varphi) · P0(-phi_left) · X01(theta) · P0(phi_right)`,
/// for `S12` it is `P0(varphi) · P2(phi_left) · X12(theta) · P2(-phi_right)`.
/// The rightmost factor acts on a state first.
pub fn arbitrary_rotation(
    subspace: Subspace,
    theta: f64,
    phi_left: f64,
    phi_right: f64,
    varphi: f64,
) -> Unitary3x3 {
    trace!(%subspace, theta, phi_left, phi_right, varphi, "building arbitrary rotation");
    let factors = match subspace {
        Subspace::S01 => [p2(varphi), p0(-phi_left), x01(theta), p0(phi_right)],
        Subspace::S12 => [p0(varphi), p2(phi_left), x12(theta), p2(-phi_right)],
    };
    Unitary3x3::product(&factors)
}

/// Arbitrary rotation on levels 0-1.
#[inline]
pub fn r01(theta: f64, phi_left: f64, phi_right: f64, varphi: f64) -> Unitary3x3 {
    arbitrary_rotation(Subspace::S01, theta, phi_left, phi_right, varphi)
}

/// Arbitrary rotation on levels 1-2.
#[inline]
pub fn r12(theta: f64, phi_left: f64, phi_right: f64, varphi: f64) -> Unitary3x3 {
    arbitrary_rotation(Subspace::S12, theta, phi_left, phi_right, varphi)
}

// ---------------------------------------------------------------------------
// Gate catalogue
// ---------------------------------------------------------------------------

/// Every gate this crate can build, with its angles bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gate", rename_all = "lowercase")]
pub enum QutritGate {
    /// X rotation on levels 0-1.
    X01 {
        /// Rotation angle.
        theta: f64,
    },
    /// X rotation on levels 1-2.
    X12 {
        /// Rotation angle.
        theta: f64,
    },
    /// Y rotation on levels 0-1.
    Y01 {
        /// Rotation angle.
        theta: f64,
    },
    /// Y rotation on levels 1-2.
    Y12 {
        /// Rotation angle.
        theta: f64,
    },
    /// Balanced phase on levels 0-1.
    Z01 {
        /// Phase angle.
        phi: f64,
    },
    /// Balanced phase on levels 1-2.
    Z12 {
        /// Phase angle.
        phi: f64,
    },
    /// Phase on level 0.
    P0 {
        /// Phase angle.
        varphi: f64,
    },
    /// Phase on level 2.
    P2 {
        /// Phase angle.
        varphi: f64,
    },
    /// Arbitrary rotation on levels 0-1.
    R01 {
        /// Rotation angle.
        theta: f64,
        /// Phase applied after the rotation (enters P0 negated).
        phi_left: f64,
        /// Phase applied before the rotation.
        phi_right: f64,
        /// Phase on the spectator level.
        varphi: f64,
    },
    /// Arbitrary rotation on levels 1-2.
    R12 {
        /// Rotation angle.
        theta: f64,
        /// Phase applied after the rotation.
        phi_left: f64,
        /// Phase applied before the rotation (enters P2 negated).
        phi_right: f64,
        /// Phase on the spectator level.
        varphi: f64,
    },
}

impl QutritGate {
    /// Names accepted by [`QutritGate::from_name`].
    pub const NAMES: [&'static str; 10] = [
        "x01", "x12", "y01", "y12", "z01", "z12", "p0", "p2", "r01", "r12",
    ];

    /// Number of angle parameters the named gate takes.
    ///
    /// Names are matched case-insensitively.
    pub fn arity(name: &str) -> QutritResult<usize> {
        match name.to_ascii_lowercase().as_str() {
            "x01" | "x12" | "y01" | "y12" | "z01" | "z12" | "p0" | "p2" => Ok(1),
            "r01" | "r12" => Ok(4),
            _ => Err(QutritError::UnknownGate(name.to_string())),
        }
    }

    /// Build a gate from its name and angle parameters.
    ///
    /// Names are matched case-insensitively.
    pub fn from_name(name: &str, params: &[f64]) -> QutritResult<Self> {
        let lower = name.to_ascii_lowercase();
        let expected = Self::arity(&lower)?;
        if params.len() != expected {
            return Err(QutritError::ParameterCountMismatch {
                gate: lower,
                expected,
                got: params.len(),
            });
        }

        let gate = match (lower.as_str(), params) {
            ("x01", &[theta]) => QutritGate::X01 { theta },
            ("x12", &[theta]) => QutritGate::X12 { theta },
            ("y01", &[theta]) => QutritGate::Y01 { theta },
            ("y12", &[theta]) => QutritGate::Y12 { theta },
            ("z01", &[phi]) => QutritGate::Z01 { phi },
            ("z12", &[phi]) => QutritGate::Z12 { phi },
            ("p0", &[varphi]) => QutritGate::P0 { varphi },
            ("p2", &[varphi]) => QutritGate::P2 { varphi },
            ("r01", &[theta, phi_left, phi_right, varphi]) => QutritGate::R01 {
                theta,
                phi_left,
                phi_right,
                varphi,
            },
            ("r12", &[theta, phi_left, phi_right, varphi]) => QutritGate::R12 {
                theta,
                phi_left,
                phi_right,
                varphi,
            },
            _ => return Err(QutritError::UnknownGate(name.to_string())),
        };
        trace!(gate = gate.name(), ?params, "resolved gate");
        Ok(gate)
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            QutritGate::X01 { .. } => "x01",
            QutritGate::X12 { .. } => "x12",
            QutritGate::Y01 { .. } => "y01",
            QutritGate::Y12 { .. } => "y12",
            QutritGate::Z01 { .. } => "z01",
            QutritGate::Z12 { .. } => "z12",
            QutritGate::P0 { .. } => "p0",
            QutritGate::P2 { .. } => "p2",
            QutritGate::R01 { .. } => "r01",
            QutritGate::R12 { .. } => "r12",
        }
    }

    /// Get the bound angle parameters, in constructor order.
    pub fn params(&self) -> Vec<f64> {
        match *self {
            QutritGate::X01 { theta }
            | QutritGate::X12 { theta }
            | QutritGate::Y01 { theta }
            | QutritGate::Y12 { theta } => vec![theta],
            QutritGate::Z01 { phi } | QutritGate::Z12 { phi } => vec![phi],
            QutritGate::P0 { varphi } | QutritGate::P2 { varphi } => vec![varphi],
            QutritGate::R01 {
                theta,
                phi_left,
                phi_right,
                varphi,
            }
            | QutritGate::R12 {
                theta,
                phi_left,
                phi_right,
                varphi,
            } => vec![theta, phi_left, phi_right, varphi],
        }
    }

    /// The two-level subspace the gate rotates, if any.
    ///
    /// Level phase gates return `None`.
    pub fn subspace(&self) -> Option<Subspace> {
        match self {
            QutritGate::X01 { .. }
            | QutritGate::Y01 { .. }
            | QutritGate::Z01 { .. }
            | QutritGate::R01 { .. } => Some(Subspace::S01),
            QutritGate::X12 { .. }
            | QutritGate::Y12 { .. }
            | QutritGate::Z12 { .. }
            | QutritGate::R12 { .. } => Some(Subspace::S12),
            QutritGate::P0 { .. } | QutritGate::P2 { .. } => None,
        }
    }

    /// Whether the gate is a product of other gates.
    pub fn is_composite(&self) -> bool {
        matches!(self, QutritGate::R01 { .. } | QutritGate::R12 { .. })
    }

    /// The gate's 3x3 unitary.
    pub fn matrix(&self) -> Unitary3x3 {
        match *self {
            QutritGate::X01 { theta } => x01(theta),
            QutritGate::X12 { theta } => x12(theta),
            QutritGate::Y01 { theta } => y01(theta),
            QutritGate::Y12 { theta } => y12(theta),
            QutritGate::Z01 { phi } => z01(phi),
            QutritGate::Z12 { phi } => z12(phi),
            QutritGate::P0 { varphi } => p0(varphi),
            QutritGate::P2 { varphi } => p2(varphi),
            QutritGate::R01 {
                theta,
                phi_left,
                phi_right,
                varphi,
            } => r01(theta, phi_left, phi_right, varphi),
            QutritGate::R12 {
                theta,
                phi_left,
                phi_right,
                varphi,
            } => r12(theta, phi_left, phi_right, varphi),
        }
    }
}

impl fmt::Display for QutritGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params().iter().map(|p| format!("{p:.4}")).collect();
        write!(f, "{}({})", self.name(), params.join(", "))
    }
}
