///
/// A mixed-radix counter over a fixed list of radices, rightmost digit
/// varying fastest. Walking it from all-zero to exhaustion visits every
/// combination of the Cartesian product exactly once, in the same order as
/// nested `for` loops with the last list innermost.
///
/// Used for full-space enumeration and for enumerating only the free
/// positions of a motif.
///
#[derive(Debug, Clone)]
pub struct Odometer {
    radices: Vec<usize>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl Odometer {
    /// A zero-length odometer yields exactly one (empty) combination.
    /// Any zero radix makes the product empty.
    pub fn new(radices: Vec<usize>) -> Self {
        let exhausted = radices.contains(&0);
        let digits = vec![0; radices.len()];
        Odometer {
            radices,
            digits,
            exhausted,
        }
    }

    pub fn digits(&self) -> Option<&[usize]> {
        match self.exhausted {
            true => None,
            false => Some(&self.digits),
        }
    }

    /// Step to the next combination. Returns false once the counter rolls
    /// over past the last combination.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        for i in (0..self.digits.len()).rev() {
            self.digits[i] += 1;
            if self.digits[i] < self.radices[i] {
                return true;
            }
            self.digits[i] = 0;
        }
        self.exhausted = true;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn collect(mut odometer: Odometer) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        while let Some(digits) = odometer.digits() {
            out.push(digits.to_vec());
            odometer.advance();
        }
        out
    }

    #[rstest]
    fn test_rightmost_varies_fastest() {
        let combos = collect(Odometer::new(vec![2, 3]));
        assert_eq!(
            combos,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[rstest]
    fn test_empty_radices_yield_one_combination() {
        assert_eq!(collect(Odometer::new(vec![])), vec![Vec::<usize>::new()]);
    }

    #[rstest]
    fn test_zero_radix_yields_nothing() {
        assert!(collect(Odometer::new(vec![3, 0])).is_empty());
    }
}
