use crate::distribution::CountDistribution;
use crate::results::WordleError;
use std::result::Result;
use std::sync::Arc;

/// Gives guesses a score against the words that could still be the objective, where the maximum
/// score indicates the best guess.
///
/// Scorers must not depend on anything but the guess and the candidates, so that a
/// [`GuessSelector`](crate::GuessSelector) can score guesses in any order, or in parallel.
pub trait WordScorer {
    /// Determines a score for the given guess. The higher the score, the better the guess.
    fn score_word(&self, guess: &str, candidates: &[Arc<str>]) -> Result<f64, WordleError>;
}

/// Scores a guess by the Shannon entropy, in bits, of the feedback it would produce.
///
/// If a guess splits `N` candidates into groups of size `n_k` by feedback, its score is
/// `-Σ (n_k/N) * log2(n_k/N)`: the expected number of bits the feedback will reveal. A guess that
/// cannot tell any candidates apart scores 0, while a guess that gives each candidate different
/// feedback scores `log2(N)`.
///
/// This is a one-step greedy heuristic; it does not look ahead to later guesses.
///
/// ```
/// use entropy_wordle_solver::scorers::{EntropyScorer, WordScorer};
/// use std::sync::Arc;
///
/// let candidates: Vec<Arc<str>> = vec![Arc::from("cod"), Arc::from("wod"), Arc::from("mod")];
///
/// assert_eq!(EntropyScorer.score_word("zzz", &candidates), Ok(0.0));
/// let score = EntropyScorer.score_word("mwc", &candidates).unwrap();
/// assert!((score - 3f64.log2()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyScorer;

impl WordScorer for EntropyScorer {
    fn score_word(&self, guess: &str, candidates: &[Arc<str>]) -> Result<f64, WordleError> {
        let distribution = CountDistribution::compute(guess, candidates)?;
        Ok(distribution_entropy(&distribution))
    }
}

/// The entropy, in bits, of a distribution.
pub fn distribution_entropy(distribution: &CountDistribution) -> f64 {
    entropy(distribution.group_sizes(), distribution.total())
}

/// The entropy, in bits, of splitting `total` items into groups of the given sizes.
///
/// Empty groups contribute nothing, and a `total` of 0 has no entropy.
pub fn entropy<I>(group_sizes: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    // Sum in a fixed order so that equal distributions get bit-for-bit equal scores.
    let mut group_sizes: Vec<usize> = group_sizes
        .into_iter()
        .filter(|size| *size > 0)
        .collect();
    group_sizes.sort_unstable();
    let sum: f64 = group_sizes
        .into_iter()
        .map(|size| {
            let p = size as f64 / total;
            p * p.log2()
        })
        .sum();
    // Avoid reporting -0.0 for a single group.
    if sum == 0.0 {
        0.0
    } else {
        -sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_single_group_is_zero() {
        assert_eq!(entropy([7], 7), 0.0);
        assert!(entropy([7], 7).is_sign_positive());
    }

    #[test]
    fn entropy_of_singletons_is_log2_n() {
        assert!((entropy([1; 8], 8) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_of_uneven_split() {
        // p = 1/4, 3/4
        let expected = -(0.25 * 0.25f64.log2() + 0.75 * 0.75f64.log2());
        assert!((entropy([1, 3], 4) - expected).abs() < 1e-12);
    }

    #[test]
    fn entropy_of_nothing_is_zero() {
        assert_eq!(entropy(Vec::new(), 0), 0.0);
    }
}
