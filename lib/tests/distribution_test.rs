#[macro_use]
extern crate assert_matches;

use entropy_wordle_solver::details::*;
use entropy_wordle_solver::*;

use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

fn all_words(letters: &[char], length: usize) -> Vec<Arc<str>> {
    let mut words: Vec<String> = vec![String::new()];
    for _ in 0..length {
        words = words
            .iter()
            .flat_map(|prefix| letters.iter().map(move |letter| format!("{}{}", prefix, letter)))
            .collect();
    }
    words.iter().map(|word| Arc::from(word.as_str())).collect()
}

#[test]
fn groups_partition_candidates() -> Result<(), WordleError> {
    let candidates = all_words(&['a', 'b', 'c'], 3);

    for guess in &candidates {
        let groups = GroupDistribution::compute(guess, &candidates)?;

        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut total = 0;
        for (code, words) in groups.iter() {
            assert!(!words.is_empty());
            for word in words {
                assert_eq!(get_result_for_guess(word, guess)?, code);
                assert!(seen.insert(Arc::clone(word)), "{} in two groups", word);
            }
            total += words.len();
        }
        assert_eq!(total, candidates.len());
        assert_eq!(groups.total(), candidates.len());
    }
    Ok(())
}

#[test]
fn groups_keep_candidate_order() -> Result<(), WordleError> {
    let candidates: Vec<Arc<str>> = ["mod", "zzz", "cod", "wod"]
        .iter()
        .map(|word| Arc::from(*word))
        .collect();

    let groups = GroupDistribution::compute("aod", &candidates)?;

    assert_eq!(
        groups.group(FeedbackCode::new(2)),
        Some(&[Arc::clone(&candidates[0]), Arc::clone(&candidates[2]), Arc::clone(&candidates[3])][..])
    );
    assert_eq!(groups.group(FeedbackCode::new(1)), None);
    Ok(())
}

#[test]
fn distribution_modes_share_grouping() -> Result<(), WordleError> {
    let candidates = all_words(&['a', 'b', 'c', 'd'], 3);

    let counts = Distribution::compute("abd", &candidates, DistributionMode::Counts)?;
    let groups = Distribution::compute("abd", &candidates, DistributionMode::Groups)?;

    assert_matches!(counts, Distribution::Counts(_));
    assert_matches!(groups, Distribution::Groups(_));
    assert_eq!(counts.total(), 64);
    assert_eq!(groups.total(), 64);
    assert_eq!(counts.num_groups(), groups.num_groups());
    for code in 0..FeedbackCode::num_codes(3).unwrap() {
        let code = FeedbackCode::new(code);
        assert_eq!(counts.count(code), groups.count(code));
    }
    Ok(())
}

#[test]
fn count_distribution_sums_to_total() -> Result<(), WordleError> {
    let candidates = all_words(&['a', 'b'], 4);

    let counts = CountDistribution::compute("abba", &candidates)?;

    assert_eq!(counts.iter().map(|(_, count)| count).sum::<usize>(), 16);
    assert_eq!(counts.count(FeedbackCode::ALL_CORRECT), 1);
    Ok(())
}

#[test]
fn empty_candidates() -> Result<(), WordleError> {
    let counts = CountDistribution::compute("abc", &[])?;

    assert_eq!(counts.total(), 0);
    assert_eq!(counts.num_groups(), 0);
    Ok(())
}
