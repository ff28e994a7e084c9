//! Brute-force candidate generator

use num_bigint::BigUint;

use super::Alphabet;
use crate::error::Result;
use crate::validation_error;

/// Generator for every string of a fixed length over an alphabet
///
/// Candidates come out in the lexicographic order induced by the alphabet's
/// own ordering. State is one digit per position, so memory stays O(length)
/// no matter how large k^length gets.
pub struct BruteForceGenerator {
    alphabet: Alphabet,
    length: usize,
    digits: Vec<usize>,
    current_index: u128,
    total: Option<u128>,
    exhausted: bool,
}

impl BruteForceGenerator {
    /// Create a new generator for candidates of given length
    pub fn new(alphabet: Alphabet, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(validation_error!("length must be a positive integer"));
        }
        let total = alphabet.total_combinations(length);
        Ok(Self {
            alphabet,
            length,
            digits: vec![0; length],
            current_index: 0,
            total,
            exhausted: false,
        })
    }

    /// Total number of combinations, `None` if it overflows a u128
    pub fn total(&self) -> Option<u128> {
        self.total
    }

    /// Exact number of combinations, however large
    pub fn exact_total(&self) -> BigUint {
        self.alphabet.exact_combinations(self.length)
    }

    /// Index of the next candidate to be produced
    pub fn current_index(&self) -> u128 {
        self.current_index
    }

    /// Set current index (for resume)
    pub fn set_index(&mut self, index: u128) {
        if self.total.is_some_and(|t| index >= t) {
            self.current_index = self.total.unwrap_or(index);
            self.exhausted = true;
            return;
        }
        self.digits = self.decode(index);
        self.current_index = index;
        self.exhausted = false;
    }

    /// Generate candidate at specific index
    pub fn candidate_at(&self, index: u128) -> Option<String> {
        if self.total.is_some_and(|t| index >= t) {
            return None;
        }
        Some(self.render(&self.decode(index)))
    }

    /// Generate next batch of candidates
    pub fn next_batch(&mut self, count: usize) -> Vec<String> {
        let mut batch = Vec::with_capacity(count);
        while batch.len() < count {
            match self.next() {
                Some(candidate) => batch.push(candidate),
                None => break,
            }
        }
        batch
    }

    /// Check if generator is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Get progress percentage
    pub fn progress_percent(&self) -> f64 {
        match self.total {
            Some(0) => 100.0,
            Some(total) => (self.current_index as f64 / total as f64) * 100.0,
            None => 0.0,
        }
    }

    /// Remaining count
    pub fn remaining(&self) -> Option<u128> {
        self.total.map(|t| t.saturating_sub(self.current_index))
    }

    fn decode(&self, index: u128) -> Vec<usize> {
        let base = self.alphabet.len() as u128;
        let mut digits = vec![0; self.length];
        let mut n = index;
        for i in (0..self.length).rev() {
            digits[i] = (n % base) as usize;
            n /= base;
        }
        digits
    }

    fn render(&self, digits: &[usize]) -> String {
        let chars = self.alphabet.chars();
        digits.iter().map(|&d| chars[d]).collect()
    }

    // Odometer step; rolling over the leftmost position ends the sequence
    fn advance(&mut self) {
        let base = self.alphabet.len();
        for i in (0..self.length).rev() {
            self.digits[i] += 1;
            if self.digits[i] < base {
                return;
            }
            self.digits[i] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for BruteForceGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let candidate = self.render(&self.digits);
        self.current_index = self.current_index.saturating_add(1);
        self.advance();
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::Charset;
    use std::collections::HashSet;

    fn ab() -> Alphabet {
        Alphabet::new("AB".chars()).unwrap()
    }

    #[test]
    fn test_generator_total() {
        let gen = BruteForceGenerator::new(Alphabet::from(Charset::Full), 4).unwrap();
        assert_eq!(gen.total(), Some(67_u128.pow(4)));
        assert_eq!(gen.exact_total(), BigUint::from(67_u128.pow(4)));
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(BruteForceGenerator::new(ab(), 0).is_err());
    }

    #[test]
    fn test_two_letter_alphabet_order() {
        let gen = BruteForceGenerator::new(ab(), 2).unwrap();
        let all: Vec<String> = gen.collect();
        assert_eq!(all, vec!["AA", "AB", "BA", "BB"]);
    }

    #[test]
    fn test_candidate_at() {
        let gen = BruteForceGenerator::new(Alphabet::from(Charset::Lower), 4).unwrap();
        assert_eq!(gen.candidate_at(0), Some("aaaa".to_string()));
        assert_eq!(gen.candidate_at(1), Some("aaab".to_string()));
        assert_eq!(gen.candidate_at(25), Some("aaaz".to_string()));
        assert_eq!(gen.candidate_at(26), Some("aaba".to_string()));
        assert_eq!(gen.candidate_at(26_u128.pow(4)), None);
    }

    #[test]
    fn test_order_follows_alphabet_not_ascii() {
        let alphabet = Alphabet::new("ba".chars()).unwrap();
        let all: Vec<String> = BruteForceGenerator::new(alphabet, 2).unwrap().collect();
        assert_eq!(all, vec!["bb", "ba", "ab", "aa"]);
    }

    #[test]
    fn test_full_enumeration_is_complete_and_distinct() {
        let alphabet = Alphabet::new("xyz1".chars()).unwrap();
        let all: Vec<String> = BruteForceGenerator::new(alphabet.clone(), 3).unwrap().collect();
        assert_eq!(all.len(), 64);
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), 64);
        for s in &all {
            assert_eq!(s.chars().count(), 3);
            assert!(s.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn test_iterator_matches_candidate_at() {
        let gen = BruteForceGenerator::new(Alphabet::from(Charset::Digits), 3).unwrap();
        let probe = BruteForceGenerator::new(Alphabet::from(Charset::Digits), 3).unwrap();
        for (i, s) in gen.enumerate() {
            assert_eq!(probe.candidate_at(i as u128).as_deref(), Some(s.as_str()));
        }
    }

    #[test]
    fn test_next_batch() {
        let mut gen = BruteForceGenerator::new(Alphabet::from(Charset::Lower), 4).unwrap();
        let batch = gen.next_batch(3);
        assert_eq!(batch, vec!["aaaa", "aaab", "aaac"]);
        assert_eq!(gen.current_index(), 3);
    }

    #[test]
    fn test_last_batch_is_short() {
        let mut gen = BruteForceGenerator::new(ab(), 2).unwrap();
        assert_eq!(gen.next_batch(3).len(), 3);
        assert_eq!(gen.next_batch(3), vec!["BB"]);
        assert!(gen.is_exhausted());
        assert!(gen.next_batch(3).is_empty());
        assert_eq!(gen.progress_percent(), 100.0);
    }

    #[test]
    fn test_resume() {
        let mut gen = BruteForceGenerator::new(Alphabet::from(Charset::Lower), 4).unwrap();
        gen.set_index(100);
        assert_eq!(gen.current_index(), 100);
        let expected = gen.candidate_at(100);
        assert_eq!(gen.next(), expected);
        assert_eq!(gen.remaining(), Some(26_u128.pow(4) - 101));
    }

    #[test]
    fn test_resume_past_end() {
        let mut gen = BruteForceGenerator::new(ab(), 2).unwrap();
        gen.set_index(10);
        assert!(gen.is_exhausted());
        assert_eq!(gen.next(), None);
        assert_eq!(gen.remaining(), Some(0));
    }

    #[test]
    fn test_single_char_alphabet() {
        let alphabet = Alphabet::new("x".chars()).unwrap();
        let all: Vec<String> = BruteForceGenerator::new(alphabet, 5).unwrap().collect();
        assert_eq!(all, vec!["xxxxx"]);
    }

    #[test]
    fn test_huge_space_is_lazy() {
        let mut gen = BruteForceGenerator::new(Alphabet::from(Charset::Full), 30).unwrap();
        assert_eq!(gen.total(), None);
        assert_eq!(gen.exact_total(), BigUint::from(67_u32).pow(30));
        let first = gen.next().unwrap();
        assert_eq!(first, "A".repeat(30));
        assert_eq!(gen.next().unwrap(), format!("{}B", "A".repeat(29)));
    }
}
