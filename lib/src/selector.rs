use crate::results::WordleError;
use crate::scorers::{EntropyScorer, WordScorer};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::result::Result;
use std::sync::Arc;

/// One guess and its score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredGuess {
    pub word: Arc<str>,
    pub score: f64,
    /// The position of `word` in the guess vocabulary it was scored from.
    pub index: usize,
}

/// The score of every guess in a vocabulary, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreTable {
    entries: Vec<ScoredGuess>,
}

impl ScoreTable {
    /// The highest-scoring guess. Among equal scores, the one earliest in the vocabulary wins.
    pub fn best(&self) -> Option<&ScoredGuess> {
        let mut best: Option<&ScoredGuess> = None;
        for entry in &self.entries {
            match best {
                Some(current) if current.score >= entry.score => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// All guesses from best to worst, breaking ties by vocabulary order.
    pub fn ranked(&self) -> Vec<&ScoredGuess> {
        let mut ranked: Vec<&ScoredGuess> = self.entries.iter().collect();
        ranked.sort_unstable_by(|a, b| compare_scored_guesses(a, b));
        ranked
    }

    /// The `n` best guesses, breaking ties by vocabulary order.
    pub fn top(&self, n: usize) -> Vec<&ScoredGuess> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    pub fn get(&self, word: &str) -> Option<&ScoredGuess> {
        self.entries.iter().find(|entry| &*entry.word == word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredGuess> {
        self.entries.iter()
    }
}

fn compare_scored_guesses(a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then(a.index.cmp(&b.index))
}

/// Scores every guess in a vocabulary against the current candidates.
///
/// ```
/// use entropy_wordle_solver::GuessSelector;
/// use entropy_wordle_solver::WordBank;
///
/// let bank = WordBank::from_iterator(&["cod", "wod", "mod", "mwc"]).unwrap();
/// let selector = GuessSelector::default();
///
/// let table = selector.score_guesses(&bank, &bank[0..3], None).unwrap();
///
/// assert_eq!(table.len(), 4);
/// assert_eq!(&*table.best().unwrap().word, "mwc");
/// ```
#[derive(Debug, Clone)]
pub struct GuessSelector<S = EntropyScorer> {
    scorer: S,
    parallel: bool,
}

impl Default for GuessSelector<EntropyScorer> {
    fn default() -> Self {
        GuessSelector::new(EntropyScorer)
    }
}

impl<S> GuessSelector<S>
where
    S: WordScorer + Sync,
{
    /// Constructs a selector that scores guesses in parallel with the given scorer.
    pub fn new(scorer: S) -> GuessSelector<S> {
        GuessSelector {
            scorer,
            parallel: true,
        }
    }

    /// Whether to spread scoring across the rayon thread pool. The results are identical either
    /// way.
    pub fn with_parallel(mut self, parallel: bool) -> GuessSelector<S> {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Scores each word in `guesses` against `candidates`.
    ///
    /// `progress`, if given, is called once for each guess after it is scored. When scoring in
    /// parallel it may be called from several threads, in any order.
    pub fn score_guesses(
        &self,
        guesses: &[Arc<str>],
        candidates: &[Arc<str>],
        progress: Option<&(dyn Fn(&ScoredGuess) + Sync)>,
    ) -> Result<ScoreTable, WordleError> {
        let score = |(index, word): (usize, &Arc<str>)| -> Result<ScoredGuess, WordleError> {
            let scored = ScoredGuess {
                word: Arc::clone(word),
                score: self.scorer.score_word(word, candidates)?,
                index,
            };
            if let Some(progress) = progress {
                progress(&scored);
            }
            Ok(scored)
        };
        // Indexed parallel iterators collect in their original order.
        let entries = if self.parallel {
            guesses
                .par_iter()
                .enumerate()
                .map(score)
                .collect::<Result<Vec<ScoredGuess>, WordleError>>()?
        } else {
            guesses
                .iter()
                .enumerate()
                .map(score)
                .collect::<Result<Vec<ScoredGuess>, WordleError>>()?
        };
        Ok(ScoreTable { entries })
    }

    /// Scores every guess, and returns the table along with its best entry.
    pub fn select_best(
        &self,
        guesses: &[Arc<str>],
        candidates: &[Arc<str>],
        progress: Option<&(dyn Fn(&ScoredGuess) + Sync)>,
    ) -> Result<(ScoreTable, Option<ScoredGuess>), WordleError> {
        let table = self.score_guesses(guesses, candidates, progress)?;
        let best = table.best().cloned();
        Ok((table, best))
    }
}
