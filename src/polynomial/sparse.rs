use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::collections::btree_map::{self, BTreeMap};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::monomial::Monomial;
use crate::error::{Result, SchurError};

pub type Coefficient = BigRational;

/// A multivariate polynomial with exact rational coefficients in the variables `x1, x2, ...`.
///
/// The representation is always fully expanded: a map from monomial to nonzero coefficient.
/// Two polynomials are therefore equal exactly when they are equal as polynomials, whatever
/// sequence of operations produced them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "Vec<(Monomial, Coefficient)>",
        from = "Vec<(Monomial, Coefficient)>"
    )
)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Coefficient>,
}

impl Polynomial {
    pub fn constant(c: Coefficient) -> Self {
        Polynomial::term(Monomial::one(), c)
    }

    pub fn from_integer(n: i64) -> Self {
        Polynomial::constant(BigRational::from_integer(BigInt::from(n)))
    }

    /// The variable `x{index+1}`.
    pub fn var(index: usize) -> Self {
        Polynomial::from(Monomial::var_pow(index, 1))
    }

    pub fn term(monomial: Monomial, c: Coefficient) -> Self {
        let mut p = Polynomial::zero();
        p.add_term(monomial, c);
        p
    }

    /// Number of (nonzero) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms from the leading (lexicographically largest) monomial down.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Coefficient)> {
        self.terms.iter().rev()
    }

    pub fn leading_term(&self) -> Option<(&Monomial, &Coefficient)> {
        self.terms.last_key_value()
    }

    pub fn coefficient(&self, monomial: &Monomial) -> Coefficient {
        self.terms.get(monomial).cloned().unwrap_or_else(Coefficient::zero)
    }

    /// Add `c * monomial` in place, dropping the term if it cancels.
    pub fn add_term(&mut self, monomial: Monomial, c: Coefficient) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(c);
            }
            btree_map::Entry::Occupied(mut entry) => {
                *entry.get_mut() += c;
                if entry.get().is_zero() {
                    entry.remove();
                }
            }
        }
    }

    /// Total degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.keys().map(Monomial::degree).max()
    }

    /// Every term has total degree `degree`. The zero polynomial is homogeneous of any degree.
    pub fn is_homogeneous(&self, degree: u32) -> bool {
        self.terms.keys().all(|m| m.degree() == degree)
    }

    /// One more than the highest variable index that appears.
    pub fn num_vars(&self) -> usize {
        self.terms.keys().map(Monomial::num_vars).max().unwrap_or(0)
    }

    pub fn pow(&self, mut exponent: u32) -> Polynomial {
        let mut base = self.clone();
        let mut acc = Polynomial::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = &acc * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Rename variable `i` to `perm[i]`; see [`Monomial::permute`].
    pub fn permute_variables(&self, perm: &[usize]) -> Polynomial {
        self.terms
            .iter()
            .map(|(m, c)| (m.permute(perm), c.clone()))
            .collect()
    }

    /// Invariant under every permutation of `x1..=xn`.
    ///
    /// Adjacent transpositions generate the symmetric group, so those are all that is checked.
    pub fn is_symmetric(&self, n: usize) -> bool {
        (1..n).all(|i| {
            let mut perm = (0..n).collect::<Vec<_>>();
            perm.swap(i - 1, i);
            self.permute_variables(&perm) == *self
        })
    }

    /// The quotient `self / divisor`, which must be exact.
    ///
    /// Multivariate division by a single polynomial in lexicographic order: the leading term of
    /// the remainder is cancelled until nothing is left. When `divisor` divides `self` that
    /// leading term is always divisible by the divisor's leading term, so failing to divide it
    /// means the division is not exact.
    pub fn div_exact(&self, divisor: &Polynomial) -> Result<Polynomial> {
        let (lead_monomial, lead_coefficient) =
            divisor.leading_term().ok_or(SchurError::ZeroDivisor)?;

        let mut remainder = self.clone();
        let mut quotient = Polynomial::zero();
        while let Some((monomial, c)) = remainder.leading_term() {
            let factor = monomial
                .checked_div(lead_monomial)
                .ok_or(SchurError::InexactDivision)?;
            let scale = c / lead_coefficient;

            for (m, d) in &divisor.terms {
                remainder.add_term(m.multiply(&factor), -(d * &scale));
            }
            quotient.add_term(factor, scale);
        }
        Ok(quotient)
    }
}

impl From<Monomial> for Polynomial {
    fn from(monomial: Monomial) -> Self {
        Polynomial::term(monomial, Coefficient::one())
    }
}

impl FromIterator<(Monomial, Coefficient)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (Monomial, Coefficient)>>(iter: I) -> Self {
        let mut p = Polynomial::zero();
        for (m, c) in iter {
            p.add_term(m, c);
        }
        p
    }
}

impl From<Vec<(Monomial, Coefficient)>> for Polynomial {
    fn from(terms: Vec<(Monomial, Coefficient)>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<Polynomial> for Vec<(Monomial, Coefficient)> {
    fn from(p: Polynomial) -> Self {
        p.terms.into_iter().collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Arithmetic

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial {
            terms: BTreeMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::from(Monomial::one())
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        for (m, c) in &rhs.terms {
            self.add_term(m.clone(), c.clone());
        }
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        for (m, c) in &rhs.terms {
            self.add_term(m.clone(), -c.clone());
        }
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut out = Polynomial::zero();
        for (a, c) in &self.terms {
            for (b, d) in &rhs.terms {
                out.add_term(a.multiply(b), c * d);
            }
        }
        out
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect()
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self += &rhs;
        self
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(mut self, rhs: Polynomial) -> Polynomial {
        self -= &rhs;
        self
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::zero(), |acc, p| acc + p)
    }
}

impl Product for Polynomial {
    fn product<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::one(), |acc, p| &acc * &p)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, (m, c)) in self.terms().enumerate() {
            match (i, c.is_negative()) {
                (0, false) => {}
                (0, true) => write!(f, "-")?,
                (_, false) => write!(f, " + ")?,
                (_, true) => write!(f, " - ")?,
            }
            let magnitude = c.abs();
            if m.is_one() {
                write!(f, "{magnitude}")?;
            } else if magnitude.is_one() {
                write!(f, "{m}")?;
            } else {
                write!(f, "{magnitude}*{m}")?;
            }
        }
        Ok(())
    }
}
