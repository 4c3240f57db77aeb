use crate::distribution::GroupDistribution;
use crate::results::*;
use log::{debug, trace, warn};
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// Contains all the words for one game, in the order they were given.
///
/// Every word has the same length, consists only of lower-case ASCII letters, and appears
/// only once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be trimmed and converted to
    /// lower case. Empty lines are skipped, as are repeats of a word already read. All words must
    /// have the same length.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let lines = word_reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        WordBank::from_iterator(lines)
    }

    /// Like [`WordBank::from_reader`], but silently skips any word that does not have exactly
    /// `word_length` letters, or that contains anything other than ASCII letters.
    ///
    /// ```
    /// use entropy_wordle_solver::WordBank;
    /// use std::io::Cursor;
    ///
    /// let bank = WordBank::from_reader_with_length(Cursor::new("abc\nlonger\nxyz"), 3).unwrap();
    ///
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(bank.word_length(), 3);
    /// ```
    pub fn from_reader_with_length<R: BufRead>(
        word_reader: R,
        word_length: usize,
    ) -> Result<Self, WordleError> {
        let lines = word_reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        let mut bank = WordBank::build(lines.iter().map(|line| line.trim()).filter(|word| {
            if word.len() != word_length {
                return false;
            }
            if !word.chars().all(|letter| letter.is_ascii_alphabetic()) {
                debug!("Skipping {:?}: not made of ASCII letters", word);
                return false;
            }
            true
        }))?;
        bank.word_length = word_length;
        Ok(bank)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word will be trimmed and converted to lower case.
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank::build(words)
    }

    fn build<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut all_words: Vec<Arc<str>> = Vec::new();
        let mut word_length = 0;
        for word in words {
            let word = match normalize_word(word.as_ref())? {
                Some(word) => word,
                None => continue,
            };
            if all_words.is_empty() {
                word_length = word.len();
                if word_length > MAX_WORD_LENGTH {
                    return Err(WordleError::InvalidWordLength {
                        expected: MAX_WORD_LENGTH,
                        actual: word_length,
                    });
                }
            } else if word.len() != word_length {
                return Err(WordleError::InvalidWordLength {
                    expected: word_length,
                    actual: word.len(),
                });
            }
            let word: Arc<str> = Arc::from(word.as_str());
            if seen.insert(Arc::clone(&word)) {
                all_words.push(word);
            }
        }
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the bank, or 0 if the bank is empty.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn contains(&self, word: &str) -> bool {
        self.all_words.iter().any(|other| &**other == word)
    }

    /// Checks that the given word could be the objective, and returns the bank's copy of it.
    ///
    /// The word is trimmed and lower-cased first. A word with the wrong number of letters
    /// produces [`WordleError::InvalidWordLength`]; a well-formed word that is not in the bank
    /// produces [`WordleError::UnknownAnswer`]. Both are safe to report back to the user.
    pub fn validate_answer(&self, word: &str) -> Result<Arc<str>, WordleError> {
        let normalized = normalize_word(word)?.unwrap_or_default();
        if normalized.len() != self.word_length {
            return Err(WordleError::InvalidWordLength {
                expected: self.word_length,
                actual: normalized.len(),
            });
        }
        self.all_words
            .iter()
            .find(|other| ***other == *normalized)
            .map(Arc::clone)
            .ok_or(WordleError::UnknownAnswer(normalized))
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

fn normalize_word(word: &str) -> Result<Option<String>, WordleError> {
    let word = word.trim();
    if word.is_empty() {
        return Ok(None);
    }
    if let Some(letter) = word.chars().find(|letter| !letter.is_ascii_alphabetic()) {
        return Err(WordleError::UnsupportedCharacter(letter));
    }
    Ok(Some(word.to_ascii_lowercase()))
}

/// The words that could still be the objective, in their original order.
///
/// A `CandidateSet` is an immutable snapshot: narrowing it produces a new set and leaves this
/// one untouched, so earlier snapshots can be kept around for replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    words: Arc<[Arc<str>]>,
    word_length: usize,
}

impl CandidateSet {
    /// Creates a set containing every word in the bank.
    pub fn new(bank: &WordBank) -> CandidateSet {
        CandidateSet {
            words: Arc::from(bank.all_words.as_slice()),
            word_length: bank.word_length,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|other| &**other == word)
    }

    /// Returns the candidates that would produce `code` if `guess` were played against them.
    ///
    /// Fails with [`WordleError::Contradiction`] if no candidate does, since then the feedback
    /// cannot have come from any word in this set.
    pub fn narrow(&self, guess: &str, code: FeedbackCode) -> Result<CandidateSet, WordleError> {
        let code = code.check(self.word_length)?;
        let mut groups = GroupDistribution::compute(guess, &self.words)?;
        trace!(
            "Feedback for {} splits {} candidates into {} groups",
            guess,
            self.len(),
            groups.num_groups()
        );
        match groups.take(code) {
            Some(words) => Ok(CandidateSet {
                words: Arc::from(words),
                word_length: self.word_length,
            }),
            None => {
                warn!(
                    "No candidate among {} matches feedback {} for {}",
                    self.len(),
                    code,
                    guess
                );
                Err(WordleError::Contradiction {
                    guess: guess.to_string(),
                    code,
                })
            }
        }
    }
}

impl Deref for CandidateSet {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Cursor;

    #[test]
    fn from_reader_with_length_keeps_matching_words() -> Result<(), WordleError> {
        let bank = WordBank::from_reader_with_length(
            Cursor::new(String::from("worda\nab\nWORDB\nlongword\n\nworda")),
            5,
        )?;

        assert_eq!(&*bank, &[Arc::<str>::from("worda"), Arc::<str>::from("wordb")]);
        Ok(())
    }

    #[test]
    fn from_reader_with_length_no_matches() -> Result<(), WordleError> {
        let bank = WordBank::from_reader_with_length(Cursor::new(String::from("ab\ncd")), 5)?;

        assert!(bank.is_empty());
        assert_eq!(bank.word_length(), 5);
        Ok(())
    }

    #[test]
    fn narrow_keeps_candidate_order() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(vec!["cod", "wod", "mod", "zzz"])?;
        let candidates = CandidateSet::new(&bank);

        let narrowed = candidates.narrow("aod", FeedbackCode::new(2))?;

        assert_eq!(&*narrowed, &bank[0..3]);
        assert_eq!(candidates.len(), 4);
        Ok(())
    }
}
