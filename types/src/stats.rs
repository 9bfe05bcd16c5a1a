use serde::Serialize;

/// Result of comparing a guess against the session's shift value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Comparison {
    Correct,
    TooLow,
    TooHigh,
}

/// Running guess counters for one session.
///
/// Every guess is recorded, correct or not, so `count` always equals
/// `high + low + correct_count()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessStats {
    count: u32,
    sum: i64,
    high: u32,
    low: u32,
}

impl GuessStats {
    /// Records `guess` and returns how it compares against `shift`.
    pub fn record(&mut self, guess: i64, shift: u8) -> Comparison {
        self.count += 1;
        self.sum = self.sum.saturating_add(guess);
        let shift = i64::from(shift);
        if guess < shift {
            self.low += 1;
            Comparison::TooLow
        } else if guess > shift {
            self.high += 1;
            Comparison::TooHigh
        } else {
            Comparison::Correct
        }
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of recorded guesses that matched the shift exactly.
    pub fn correct_count(&self) -> u32 {
        self.count - self.high - self.low
    }

    /// Point-in-time view of the counters.
    ///
    /// The average is the truncating integer `sum / count`, 0 while no guess
    /// has been recorded.
    pub fn snapshot(&self) -> Statistics {
        let average = if self.count == 0 {
            0
        } else {
            self.sum / i64::from(self.count)
        };
        Statistics {
            count: self.count,
            average,
            high_count: self.high,
            low_count: self.low,
        }
    }
}

/// Guess statistics as returned to callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub count: u32,
    pub average: i64,
    pub high_count: u32,
    pub low_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_stats_average_is_zero() {
        let stats = GuessStats::default();
        assert_eq!(stats.snapshot(), Statistics::default());
    }

    #[test]
    fn test_record_classifies_against_shift() {
        let mut stats = GuessStats::default();
        assert_eq!(stats.record(2, 5), Comparison::TooLow);
        assert_eq!(stats.record(5, 5), Comparison::Correct);
        assert_eq!(stats.record(9, 5), Comparison::TooHigh);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.count, 3);
        assert_eq!(snapshot.average, 5); // (2 + 5 + 9) / 3, truncated
        assert_eq!(snapshot.low_count, 1);
        assert_eq!(snapshot.high_count, 1);
        assert_eq!(stats.correct_count(), 1);
    }

    #[test]
    fn test_average_truncates() {
        let mut stats = GuessStats::default();
        stats.record(1, 9);
        stats.record(2, 9);
        // 3 / 2 = 1 with integer truncation
        assert_eq!(stats.snapshot().average, 1);
    }

    #[test]
    fn test_negative_guesses_are_recorded() {
        let mut stats = GuessStats::default();
        assert_eq!(stats.record(-7, 1), Comparison::TooLow);
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.average, -7);
        assert_eq!(snapshot.low_count, 1);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = GuessStats::default();
        stats.record(3, 5);
        stats.record(8, 5);
        stats.reset();
        assert_eq!(stats.snapshot(), Statistics::default());
    }

    proptest! {
        #[test]
        fn prop_counters_partition_guesses(
            guesses in proptest::collection::vec(-1_000_000i64..=1_000_000, 0..64),
            shift in 1u8..=9,
        ) {
            let mut stats = GuessStats::default();
            for &guess in &guesses {
                stats.record(guess, shift);
            }
            let snapshot = stats.snapshot();
            prop_assert_eq!(snapshot.count as usize, guesses.len());
            prop_assert_eq!(
                snapshot.count,
                snapshot.high_count + snapshot.low_count + stats.correct_count()
            );
            let sum: i64 = guesses.iter().sum();
            let expected = if guesses.is_empty() { 0 } else { sum / guesses.len() as i64 };
            prop_assert_eq!(snapshot.average, expected);
        }
    }
}
