//! Square matrices of polynomials.
use num_traits::{One, Zero};

use crate::error::Result;
use crate::polynomial::Polynomial;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyMatrix {
    rows: Vec<Vec<Polynomial>>,
}

impl PolyMatrix {
    /// The `n × n` matrix with entry `(i, j)` given by `entry(i, j)`.
    pub fn from_fn<F>(n: usize, mut entry: F) -> Self
    where
        F: FnMut(usize, usize) -> Polynomial,
    {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| entry(i, j)).collect())
            .collect();
        PolyMatrix { rows }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Determinant by Bareiss fraction-free elimination.
    ///
    /// Every division in the elimination is exact, so this stays inside the polynomial ring.
    /// The empty matrix has determinant one.
    pub fn determinant(&self) -> Result<Polynomial> {
        let n = self.size();
        if n == 0 {
            return Ok(Polynomial::one());
        }

        let mut a = self.rows.clone();
        let mut negate = false;
        let mut previous_pivot = Polynomial::one();

        for k in 0..n - 1 {
            if a[k][k].is_zero() {
                match (k + 1..n).find(|&i| !a[i][k].is_zero()) {
                    Some(i) => {
                        a.swap(k, i);
                        negate = !negate;
                    }
                    None => return Ok(Polynomial::zero()),
                }
            }

            for i in k + 1..n {
                for j in k + 1..n {
                    let cross = &(&a[i][j] * &a[k][k]) - &(&a[i][k] * &a[k][j]);
                    a[i][j] = cross.div_exact(&previous_pivot)?;
                }
            }
            previous_pivot = a[k][k].clone();
        }

        let det = a[n - 1][n - 1].clone();
        Ok(if negate { -det } else { det })
    }
}
