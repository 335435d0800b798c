//! Grade randomness implementations.

use campus_domain::GradeSource;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeSource for SystemRandom {
    fn next_grade(&mut self, low: u8, high: u8) -> u8 {
        use rand::Rng;
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Fixed grade source for testing.
#[cfg(test)]
pub struct FixedRandom(pub u8);

#[cfg(test)]
impl GradeSource for FixedRandom {
    fn next_grade(&mut self, _low: u8, _high: u8) -> u8 {
        self.0
    }
}
