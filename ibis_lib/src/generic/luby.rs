//! The luby sequence: 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, …
//!
//! Terms are memoised in a growing vector, with one fresh term computed per request.
//! The term at a (one-based) position *i* is 2^(k − 1) when *i* = 2^k − 1, and otherwise repeats the prefix of the sequence from the most recent such position.

pub struct Luby {
    memo: Vec<usize>,
    anchor: usize,
}

impl Default for Luby {
    fn default() -> Self {
        Luby {
            memo: Vec::default(),
            anchor: 0,
        }
    }
}

impl Luby {
    pub fn next_term(&mut self) -> usize {
        let position = self.memo.len() + 1;
        let term = if (position + 1).is_power_of_two() {
            self.anchor = position;
            (position + 1) / 2
        } else {
            self.memo[position - self.anchor - 1]
        };
        self.memo.push(term);
        term
    }
}

impl Iterator for Luby {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_PREFIX: &[usize] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32,
    ];

    #[test]
    fn luby() {
        let mut luby = Luby::default();
        for known_term in KNOWN_PREFIX {
            assert_eq!(luby.next_term(), *known_term);
        }
    }
}
