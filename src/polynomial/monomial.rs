use core::fmt;

/// A product of variable powers `x1^e1 * x2^e2 * ...`.
///
/// Exponents are stored with trailing zeros trimmed, so the same monomial always has the same
/// representation however many variables are in play. The derived ordering is then the
/// lexicographic monomial order with `x1 > x2 > ...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monomial {
    exponents: Vec<u32>,
}

impl Monomial {
    /// `exponents[i]` is the power of variable `x{i+1}`.
    pub fn new(exponents: impl Into<Vec<u32>>) -> Self {
        let mut exponents = exponents.into();
        while exponents.last() == Some(&0) {
            exponents.pop();
        }
        Monomial { exponents }
    }

    /// The empty product.
    pub fn one() -> Self {
        Monomial::default()
    }

    /// `x{index+1}^power`
    pub fn var_pow(index: usize, power: u32) -> Self {
        let mut exponents = vec![0; index + 1];
        exponents[index] = power;
        Monomial::new(exponents)
    }

    pub fn is_one(&self) -> bool {
        self.exponents.is_empty()
    }

    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    pub fn exponent(&self, index: usize) -> u32 {
        self.exponents.get(index).copied().unwrap_or(0)
    }

    /// One more than the highest variable index with a nonzero exponent.
    pub fn num_vars(&self) -> usize {
        self.exponents.len()
    }

    pub fn degree(&self) -> u32 {
        self.exponents.iter().sum()
    }

    pub fn multiply(&self, other: &Monomial) -> Monomial {
        let len = self.exponents.len().max(other.exponents.len());
        let exponents = (0..len)
            .map(|i| self.exponent(i) + other.exponent(i))
            .collect::<Vec<_>>();
        Monomial { exponents }
    }

    /// `self / other`, if `other` divides `self`.
    pub fn checked_div(&self, other: &Monomial) -> Option<Monomial> {
        if other.exponents.len() > self.exponents.len() {
            return None;
        }
        let exponents = (0..self.exponents.len())
            .map(|i| self.exponent(i).checked_sub(other.exponent(i)))
            .collect::<Option<Vec<_>>>()?;
        Some(Monomial::new(exponents))
    }

    /// Rename variable `i` to `perm[i]`. Indices past the end of `perm` are left alone.
    ///
    /// `perm` should be a permutation of `0..perm.len()`.
    pub fn permute(&self, perm: &[usize]) -> Monomial {
        let target = |i: usize| perm.get(i).copied().unwrap_or(i);
        let len = (0..self.exponents.len())
            .map(|i| target(i) + 1)
            .max()
            .unwrap_or(0);
        let mut exponents = vec![0; len];
        for (i, &e) in self.exponents.iter().enumerate() {
            exponents[target(i)] += e;
        }
        Monomial::new(exponents)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        let mut first = true;
        for (i, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            match e {
                1 => write!(f, "x{}", i + 1)?,
                _ => write!(f, "x{}^{}", i + 1, e)?,
            }
        }
        Ok(())
    }
}
