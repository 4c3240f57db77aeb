use crate::results::*;
use std::collections::HashMap;
use std::result::Result;
use std::sync::Arc;

/// Selects what a [`Distribution`] records for each feedback code.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DistributionMode {
    /// Only count the candidates producing each code. Enough for scoring.
    Counts,
    /// Keep the candidates producing each code, in their original order. Needed for filtering.
    Groups,
}

/// The candidates grouped by the feedback they would produce for one guess.
///
/// Every candidate lands in exactly one group, and only codes that some candidate produces have
/// a group.
#[derive(Debug, PartialEq, Clone)]
pub enum Distribution {
    Counts(CountDistribution),
    Groups(GroupDistribution),
}

impl Distribution {
    /// Groups `candidates` by the feedback each would give if it were the objective and `guess`
    /// were played.
    pub fn compute(
        guess: &str,
        candidates: &[Arc<str>],
        mode: DistributionMode,
    ) -> Result<Distribution, WordleError> {
        Ok(match mode {
            DistributionMode::Counts => {
                Distribution::Counts(CountDistribution::compute(guess, candidates)?)
            }
            DistributionMode::Groups => {
                Distribution::Groups(GroupDistribution::compute(guess, candidates)?)
            }
        })
    }

    /// The number of candidates producing `code`.
    pub fn count(&self, code: FeedbackCode) -> usize {
        match self {
            Distribution::Counts(counts) => counts.count(code),
            Distribution::Groups(groups) => groups.group(code).map_or(0, <[Arc<str>]>::len),
        }
    }

    pub fn num_groups(&self) -> usize {
        match self {
            Distribution::Counts(counts) => counts.num_groups(),
            Distribution::Groups(groups) => groups.num_groups(),
        }
    }

    /// The number of candidates across all groups.
    pub fn total(&self) -> usize {
        match self {
            Distribution::Counts(counts) => counts.total(),
            Distribution::Groups(groups) => groups.total(),
        }
    }
}

fn group_by_feedback<F>(guess: &str, candidates: &[Arc<str>], mut add: F) -> Result<(), WordleError>
where
    F: FnMut(FeedbackCode, &Arc<str>),
{
    for candidate in candidates {
        let code = get_result_for_guess(candidate, guess)?;
        add(code, candidate);
    }
    Ok(())
}

/// The number of candidates producing each feedback code.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct CountDistribution {
    counts: HashMap<FeedbackCode, usize>,
    total: usize,
}

impl CountDistribution {
    pub fn compute(guess: &str, candidates: &[Arc<str>]) -> Result<Self, WordleError> {
        let mut counts: HashMap<FeedbackCode, usize> = HashMap::new();
        group_by_feedback(guess, candidates, |code, _| {
            *counts.entry(code).or_insert(0) += 1;
        })?;
        Ok(CountDistribution {
            counts,
            total: candidates.len(),
        })
    }

    pub fn count(&self, code: FeedbackCode) -> usize {
        *self.counts.get(&code).unwrap_or(&0)
    }

    pub fn num_groups(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterates over the size of each non-empty group, in no particular order.
    pub fn group_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeedbackCode, usize)> + '_ {
        self.counts.iter().map(|(code, count)| (*code, *count))
    }
}

/// The candidates producing each feedback code.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct GroupDistribution {
    groups: HashMap<FeedbackCode, Vec<Arc<str>>>,
    total: usize,
}

impl GroupDistribution {
    pub fn compute(guess: &str, candidates: &[Arc<str>]) -> Result<Self, WordleError> {
        let mut groups: HashMap<FeedbackCode, Vec<Arc<str>>> = HashMap::new();
        group_by_feedback(guess, candidates, |code, candidate| {
            groups
                .entry(code)
                .or_insert_with(Vec::new)
                .push(Arc::clone(candidate));
        })?;
        Ok(GroupDistribution {
            groups,
            total: candidates.len(),
        })
    }

    /// The candidates producing `code`, or `None` if no candidate does.
    pub fn group(&self, code: FeedbackCode) -> Option<&[Arc<str>]> {
        self.groups.get(&code).map(Vec::as_slice)
    }

    /// Removes and returns the group for `code`.
    pub fn take(&mut self, code: FeedbackCode) -> Option<Vec<Arc<str>>> {
        let group = self.groups.remove(&code)?;
        self.total -= group.len();
        Some(group)
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeedbackCode, &[Arc<str>])> + '_ {
        self.groups
            .iter()
            .map(|(code, words)| (*code, words.as_slice()))
    }

    /// Drops the words, keeping only the size of each group.
    pub fn to_counts(&self) -> CountDistribution {
        CountDistribution {
            counts: self
                .groups
                .iter()
                .map(|(code, words)| (*code, words.len()))
                .collect(),
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<Arc<str>> {
        words.iter().map(|word| Arc::from(*word)).collect()
    }

    #[test]
    fn counts_and_groups_agree() -> Result<(), WordleError> {
        let candidates = words(&["abb", "abc", "bad", "zza", "zzz"]);

        let counts = CountDistribution::compute("abz", &candidates)?;
        let groups = GroupDistribution::compute("abz", &candidates)?;

        assert_eq!(groups.to_counts(), counts);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.group_sizes().sum::<usize>(), 5);
        Ok(())
    }

    #[test]
    fn take_removes_group() -> Result<(), WordleError> {
        let candidates = words(&["cod", "wod", "mod", "zzz"]);
        let mut groups = GroupDistribution::compute("aod", &candidates)?;

        assert_eq!(groups.take(FeedbackCode::new(2)), Some(candidates[0..3].to_vec()));
        assert_eq!(groups.take(FeedbackCode::new(2)), None);
        assert_eq!(groups.total(), 1);
        assert_eq!(groups.num_groups(), 1);
        Ok(())
    }

    #[test]
    fn mismatched_guess_length_fails() {
        let candidates = words(&["cod"]);

        assert_eq!(
            CountDistribution::compute("code", &candidates),
            Err(WordleError::InvalidWordLength {
                expected: 3,
                actual: 4
            })
        );
    }
}
