//! Qutrit gate algebra
//!
//! Builds the 3x3 unitaries used to control a three-level system (a
//! "qutrit", with levels g, e, h): two-level rotations restricted to the
//! 0-1 or 1-2 subspace, phase gates, and the composite four-parameter
//! rotations of Fischer et al., PRR 2021.
//!
//! Every constructor is a pure function of its angles. Angles are radians of
//! any range; zero always gives the identity. Non-finite angles give
//! non-finite matrices rather than an error.
//!
//! # Example
//!
//! ```rust
//! use qutrit_gates::{Level, Subspace, arbitrary_rotation, rotation_x, UNITARITY_TOLERANCE};
//! use std::f64::consts::PI;
//!
//! let pi_01 = rotation_x(Subspace::S01, PI);
//! assert!(pi_01.is_unitary(UNITARITY_TOLERANCE));
//! assert!(pi_01.acts_trivially_on(Level::Higher));
//!
//! // With the phase corrections at zero the composite is the bare rotation.
//! let r = arbitrary_rotation(Subspace::S01, PI, 0.0, 0.0, 0.0);
//! assert!(r.approx_eq(&pi_01, 1e-12));
//! ```
//!
//! # Looking gates up by name
//!
//! ```rust
//! use qutrit_gates::QutritGate;
//!
//! let gate = QutritGate::from_name("r12", &[1.0, 0.2, 0.3, 0.4]).unwrap();
//! assert_eq!(gate.name(), "r12");
//! assert!(QutritGate::from_name("r12", &[1.0]).is_err());
//! ```

pub mod error;
pub mod gate;
pub mod level;
pub mod unitary;

pub use error::{QutritError, QutritResult};
pub use gate::{
    QutritGate, arbitrary_rotation, p0, p2, phase_level, phase_subspace, r01, r12, rotation_x,
    rotation_y, x01, x12, y01, y12, z01, z12,
};
pub use level::{DIM, Level, PhaseLevel, Subspace, basis_state};
pub use unitary::{UNITARITY_TOLERANCE, Unitary3x3};
