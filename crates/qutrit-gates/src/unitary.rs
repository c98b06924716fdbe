//! 3x3 unitary matrices acting on a single qutrit.
//!
//! Matrices are stored row-major in the (g, e, h) basis. Products follow the
//! operator convention: `(a * b).apply(psi) == a.apply(&b.apply(psi))`, so the
//! rightmost factor acts on a state first.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::level::{DIM, Level, Subspace};

/// Default tolerance for unitarity checks.
pub const UNITARITY_TOLERANCE: f64 = 1e-9;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A 3x3 complex matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unitary3x3 {
    /// The matrix elements in row-major order.
    pub data: [Complex64; DIM * DIM],
}

impl Unitary3x3 {
    /// Create a matrix from its rows.
    pub fn from_rows(rows: [[Complex64; DIM]; DIM]) -> Self {
        let mut data = [ZERO; DIM * DIM];
        for (r, row) in rows.iter().enumerate() {
            data[r * DIM..(r + 1) * DIM].copy_from_slice(row);
        }
        Self { data }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::diagonal([ONE, ONE, ONE])
    }

    /// Create a diagonal matrix.
    pub fn diagonal(diag: [Complex64; DIM]) -> Self {
        let mut data = [ZERO; DIM * DIM];
        for (i, d) in diag.into_iter().enumerate() {
            data[i * DIM + i] = d;
        }
        Self { data }
    }

    /// Embed a 2x2 block `[[a, b], [c, d]]` on the given subspace.
    ///
    /// The spectator level gets an exact 1 on the diagonal and exact zeros
    /// elsewhere in its row and column, whatever the block contains.
    pub fn embed(subspace: Subspace, block: [Complex64; 4]) -> Self {
        let (lo, hi) = subspace.active();
        let [a, b, c, d] = block;
        let mut m = Self::identity();
        m.data[lo * DIM + lo] = a;
        m.data[lo * DIM + hi] = b;
        m.data[hi * DIM + lo] = c;
        m.data[hi * DIM + hi] = d;
        m
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self[(row, col)]
    }

    /// Row `r` as an array.
    pub fn row(&self, r: usize) -> [Complex64; DIM] {
        [self.get(r, 0), self.get(r, 1), self.get(r, 2)]
    }

    /// Multiply this matrix by another: self * other.
    pub fn mul(&self, other: &Self) -> Self {
        let mut data = [ZERO; DIM * DIM];
        for r in 0..DIM {
            for c in 0..DIM {
                data[r * DIM + c] = (0..DIM)
                    .map(|k| self.data[r * DIM + k] * other.data[k * DIM + c])
                    .sum();
            }
        }
        Self { data }
    }

    /// Ordered product of matrices, leftmost factor first.
    ///
    /// An empty iterator yields the identity.
    pub fn product<'a, I>(factors: I) -> Self
    where
        I: IntoIterator<Item = &'a Unitary3x3>,
    {
        factors
            .into_iter()
            .fold(Self::identity(), |acc, m| acc.mul(m))
    }

    /// Get the conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        let mut data = [ZERO; DIM * DIM];
        for r in 0..DIM {
            for c in 0..DIM {
                data[c * DIM + r] = self.data[r * DIM + c].conj();
            }
        }
        Self { data }
    }

    /// Apply the matrix to a qutrit amplitude vector.
    pub fn apply(&self, state: &[Complex64; DIM]) -> [Complex64; DIM] {
        let mut out = [ZERO; DIM];
        for (r, amp) in out.iter_mut().enumerate() {
            *amp = (0..DIM).map(|c| self.data[r * DIM + c] * state[c]).sum();
        }
        out
    }

    /// Largest element-wise deviation of `U† U` from the identity.
    ///
    /// Returns NaN if any entry is non-finite.
    pub fn unitarity_error(&self) -> f64 {
        let gram = self.dagger().mul(self);
        let identity = Self::identity();
        gram.data
            .iter()
            .zip(identity.data.iter())
            .map(|(g, i)| (g - i).norm())
            .fold(0.0, |worst: f64, d| {
                // f64::max would swallow a NaN
                if worst.is_nan() || d.is_nan() {
                    f64::NAN
                } else {
                    worst.max(d)
                }
            })
    }

    /// Check whether `U† U` equals the identity within `tol`.
    pub fn is_unitary(&self, tol: f64) -> bool {
        self.unitarity_error() <= tol
    }

    /// Element-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).norm() <= tol)
    }

    /// Check if this is the identity within `tol` (no global phase allowed).
    pub fn is_identity(&self, tol: f64) -> bool {
        self.approx_eq(&Self::identity(), tol)
    }

    /// True if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|z| z.re.is_finite() && z.im.is_finite())
    }

    /// Check that `level` does not mix with the others: exact zeros in the
    /// off-diagonal part of its row and column. The diagonal may carry a phase.
    pub fn isolates(&self, level: Level) -> bool {
        let l = level.index();
        (0..DIM)
            .filter(|&k| k != l)
            .all(|k| self.data[l * DIM + k] == ZERO && self.data[k * DIM + l] == ZERO)
    }

    /// Check that `level` is left exactly untouched: a 1 on the diagonal
    /// and exact zeros in the rest of its row and column.
    pub fn acts_trivially_on(&self, level: Level) -> bool {
        let l = level.index();
        self.isolates(level) && self.data[l * DIM + l] == ONE
    }
}

impl Default for Unitary3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary3x3 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary3x3::mul(&self, &rhs)
    }
}

impl Index<(usize, usize)> for Unitary3x3 {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < DIM && col < DIM, "index ({row}, {col}) out of range");
        &self.data[row * DIM + col]
    }
}

impl fmt::Display for Unitary3x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        for r in 0..DIM {
            write!(f, "[")?;
            for c in 0..DIM {
                let z = self.data[r * DIM + c];
                let sign = if z.im.is_sign_negative() { '-' } else { '+' };
                write!(
                    f,
                    "{}{:>w$.p$} {sign} {:.p$}i",
                    if c > 0 { ", " } else { " " },
                    z.re,
                    z.im.abs(),
                    w = precision + 3,
                    p = precision,
                )?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_identity() {
        let i = Unitary3x3::identity();
        assert!(i.is_identity(0.0));
        assert!(i.is_unitary(0.0));
        assert_eq!(Unitary3x3::default(), i);
    }

    #[test]
    fn test_product_order() {
        // Cyclic shift g -> e -> h -> g
        let shift = Unitary3x3::from_rows([
            [ZERO, ZERO, ONE],
            [ONE, ZERO, ZERO],
            [ZERO, ONE, ZERO],
        ]);
        let phase = Unitary3x3::diagonal([ONE, c(0.0, 1.0), c(-1.0, 0.0)]);

        assert!(!(shift * phase).approx_eq(&(phase * shift), 1e-12));

        let g = [ONE, ZERO, ZERO];
        let direct = (shift * phase).apply(&g);
        let stepwise = shift.apply(&phase.apply(&g));
        assert_eq!(direct, stepwise);
    }

    #[test]
    fn test_product_of_empty_is_identity() {
        let empty: [Unitary3x3; 0] = [];
        assert!(Unitary3x3::product(&empty).is_identity(0.0));
    }

    #[test]
    fn test_dagger_of_non_hermitian() {
        let m = Unitary3x3::from_rows([
            [c(1.0, 2.0), c(3.0, 0.0), ZERO],
            [ZERO, c(0.0, -1.0), ZERO],
            [c(0.5, 0.5), ZERO, ONE],
        ]);
        let d = m.dagger();
        assert_eq!(d.get(0, 0), c(1.0, -2.0));
        assert_eq!(d.get(1, 0), c(3.0, 0.0));
        assert_eq!(d.get(0, 2), c(0.5, -0.5));
        assert_eq!(d.dagger(), m);
    }

    #[test]
    fn test_non_unitary_detected() {
        let m = Unitary3x3::diagonal([ONE, c(2.0, 0.0), ONE]);
        assert!(!m.is_unitary(UNITARITY_TOLERANCE));
        assert!((m.unitarity_error() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_nan_is_not_masked() {
        let m = Unitary3x3::diagonal([c(f64::NAN, 0.0), ONE, ONE]);
        assert!(!m.is_finite());
        assert!(m.unitarity_error().is_nan());
        assert!(!m.is_unitary(UNITARITY_TOLERANCE));
    }

    #[test]
    fn test_embed_locality() {
        let block = [c(0.0, 1.0), c(2.0, 0.0), c(3.0, 0.0), c(0.0, -1.0)];
        let m01 = Unitary3x3::embed(Subspace::S01, block);
        assert!(m01.acts_trivially_on(Level::Higher));
        assert!(!m01.acts_trivially_on(Level::Ground));
        assert_eq!(m01[(0, 1)], c(2.0, 0.0));

        let m12 = Unitary3x3::embed(Subspace::S12, block);
        assert!(m12.acts_trivially_on(Level::Ground));
        assert_eq!(m12[(2, 1)], c(3.0, 0.0));
    }

    #[test]
    fn test_isolated_level_may_carry_phase() {
        let m = Unitary3x3::diagonal([ONE, ONE, c(0.0, 1.0)]);
        assert!(m.isolates(Level::Higher));
        assert!(!m.acts_trivially_on(Level::Higher));
        assert!(m.acts_trivially_on(Level::Ground));
    }

    #[test]
    fn test_get_matches_index() {
        let m = Unitary3x3::from_rows([
            [ONE, c(0.0, 2.0), ZERO],
            [ZERO, c(3.0, 0.0), ZERO],
            [c(0.5, -1.0), ZERO, ONE],
        ]);
        for r in 0..DIM {
            for col in 0..DIM {
                assert_eq!(m.get(r, col), m[(r, col)]);
            }
        }
        assert_eq!(m.get(2, 0), c(0.5, -1.0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let _ = Unitary3x3::identity().get(0, 3);
    }

    #[test]
    fn test_display_has_three_rows() {
        let text = Unitary3x3::identity().to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("1.0000 + 0.0000i"));
    }
}
