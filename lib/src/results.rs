#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use thiserror::Error;

/// The longest word this library can score. `3^20` still fits in a [`FeedbackCode`].
pub const MAX_WORD_LENGTH: usize = 20;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is in this exact location.
    Correct,
    /// The letter is in the word, but somewhere else.
    PresentNotHere,
    /// The letter is not in the word, or every occurrence was already accounted for.
    NotPresent,
}

impl LetterResult {
    fn digit(self) -> u32 {
        match self {
            LetterResult::Correct => 0,
            LetterResult::PresentNotHere => 1,
            LetterResult::NotPresent => 2,
        }
    }

    fn from_digit(digit: u32) -> LetterResult {
        match digit {
            0 => LetterResult::Correct,
            1 => LetterResult::PresentNotHere,
            _ => LetterResult::NotPresent,
        }
    }
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// A word did not have the expected number of letters.
    #[error("expected a word of length {expected}, but got length {actual}")]
    InvalidWordLength { expected: usize, actual: usize },
    /// One or more given characters are not ASCII letters.
    #[error("unsupported character '{0}': words may only contain the letters a-z")]
    UnsupportedCharacter(char),
    /// The proposed objective word is not in the candidate word list.
    #[error("the word \"{0}\" is not in the candidate list")]
    UnknownAnswer(String),
    /// No candidate word is consistent with the feedback given so far.
    #[error("no candidate word produces feedback {code} for the guess \"{guess}\"")]
    Contradiction { guess: String, code: FeedbackCode },
    /// The feedback code cannot be produced by a word of this length.
    #[error("feedback code {code} is out of range for words of length {word_length}")]
    InvalidFeedback { code: FeedbackCode, word_length: usize },
    /// There are no candidate words to guess from.
    #[error("the candidate word list is empty")]
    EmptyVocabulary,
    /// A solver method was called in a state that does not allow it.
    #[error("unexpected solver state: {0}")]
    UnexpectedState(&'static str),
    /// Reading a word list failed.
    #[error("failed to read words: {0}")]
    Io(String),
}

impl From<io::Error> for WordleError {
    fn from(e: io::Error) -> Self {
        WordleError::Io(e.to_string())
    }
}

/// The feedback for a whole guess, packed as a base-3 number.
///
/// Digit `i` (least significant first) describes letter `i` of the guess: `0` is
/// [`LetterResult::Correct`], `1` is [`LetterResult::PresentNotHere`] and `2` is
/// [`LetterResult::NotPresent`]. A code of `0` means the guess was the objective.
///
/// ```
/// use entropy_wordle_solver::FeedbackCode;
/// use entropy_wordle_solver::LetterResult;
///
/// let code = FeedbackCode::from_results(&[
///     LetterResult::Correct,
///     LetterResult::PresentNotHere,
///     LetterResult::PresentNotHere,
/// ]).unwrap();
///
/// assert_eq!(code, FeedbackCode::new(12));
/// assert_eq!(code.to_results(3), vec![
///     LetterResult::Correct,
///     LetterResult::PresentNotHere,
///     LetterResult::PresentNotHere,
/// ]);
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeedbackCode(u32);

impl FeedbackCode {
    /// The code for a guess that matches the objective at every location.
    pub const ALL_CORRECT: FeedbackCode = FeedbackCode(0);

    pub const fn new(code: u32) -> FeedbackCode {
        FeedbackCode(code)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Whether every letter was correct.
    pub fn is_correct(&self) -> bool {
        self.0 == 0
    }

    /// The number of distinct codes for words of the given length, i.e. `3^word_length`, or
    /// `None` if that does not fit in a `u32`.
    pub fn num_codes(word_length: usize) -> Option<u32> {
        u32::try_from(word_length)
            .ok()
            .and_then(|exponent| 3u32.checked_pow(exponent))
    }

    /// Packs per-letter results into a code.
    pub fn from_results(results: &[LetterResult]) -> Result<FeedbackCode, WordleError> {
        if results.len() > MAX_WORD_LENGTH {
            return Err(WordleError::InvalidWordLength {
                expected: MAX_WORD_LENGTH,
                actual: results.len(),
            });
        }
        let mut code = 0;
        let mut multiplier = 1;
        for result in results {
            code += result.digit() * multiplier;
            multiplier *= 3;
        }
        Ok(FeedbackCode(code))
    }

    /// Unpacks this code into one result per letter.
    pub fn to_results(&self, word_length: usize) -> Vec<LetterResult> {
        let mut remaining = self.0;
        (0..word_length)
            .map(|_| {
                let digit = remaining % 3;
                remaining /= 3;
                LetterResult::from_digit(digit)
            })
            .collect()
    }

    /// Returns this code if a word of the given length can produce it.
    pub fn check(self, word_length: usize) -> Result<FeedbackCode, WordleError> {
        match FeedbackCode::num_codes(word_length) {
            Some(num_codes) if word_length <= MAX_WORD_LENGTH && self.0 < num_codes => Ok(self),
            _ => Err(WordleError::InvalidFeedback {
                code: self,
                word_length,
            }),
        }
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Determines the feedback for the given `guess` when applied to the given `objective`.
///
/// Exact matches are found first and consume their letter of the objective. Every other
/// letter of the guess, from left to right, then consumes the first unconsumed matching
/// letter of the objective if there is one.
///
/// ```
/// use entropy_wordle_solver::get_result_for_guess;
/// use entropy_wordle_solver::FeedbackCode;
///
/// assert_eq!(get_result_for_guess("aab", "aba"), Ok(FeedbackCode::new(12)));
/// assert!(get_result_for_guess("abc", "abc").unwrap().is_correct());
/// ```
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<FeedbackCode, WordleError> {
    let objective = objective.as_bytes();
    let guess = guess.as_bytes();
    if objective.len() != guess.len() {
        return Err(WordleError::InvalidWordLength {
            expected: objective.len(),
            actual: guess.len(),
        });
    }
    if guess.len() > MAX_WORD_LENGTH {
        return Err(WordleError::InvalidWordLength {
            expected: MAX_WORD_LENGTH,
            actual: guess.len(),
        });
    }

    let mut consumed = [false; MAX_WORD_LENGTH];
    let mut digits = [LetterResult::NotPresent; MAX_WORD_LENGTH];
    for (index, (g, o)) in guess.iter().zip(objective).enumerate() {
        if g == o {
            digits[index] = LetterResult::Correct;
            consumed[index] = true;
        }
    }
    for (index, letter) in guess.iter().enumerate() {
        if digits[index] == LetterResult::Correct {
            continue;
        }
        if let Some(other_index) =
            (0..objective.len()).find(|&i| !consumed[i] && objective[i] == *letter)
        {
            consumed[other_index] = true;
            digits[index] = LetterResult::PresentNotHere;
        }
    }
    FeedbackCode::from_results(&digits[..guess.len()])
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<std::sync::Arc<str>>),
    /// Indicates that the guesser ran out of turns, and provides the guesses that were given.
    Failure(Vec<std::sync::Arc<str>>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_duplicate_letters_left_to_right() {
        assert_eq!(get_result_for_guess("aab", "aba"), Ok(FeedbackCode::new(12)));
        // Only one 'b' is left after the exact match, so the second 'b' is absent.
        assert_eq!(
            get_result_for_guess("abcb", "bbbx").map(|code| code.to_results(4)),
            Ok(vec![
                LetterResult::PresentNotHere,
                LetterResult::Correct,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
            ])
        );
    }

    #[test]
    fn check_rejects_out_of_range_codes() {
        assert_eq!(FeedbackCode::new(26).check(3), Ok(FeedbackCode::new(26)));
        assert_eq!(
            FeedbackCode::new(27).check(3),
            Err(WordleError::InvalidFeedback {
                code: FeedbackCode::new(27),
                word_length: 3
            })
        );
    }

    #[test]
    fn num_codes_stops_at_u32() {
        assert_eq!(FeedbackCode::num_codes(0), Some(1));
        assert_eq!(FeedbackCode::num_codes(5), Some(243));
        assert_eq!(FeedbackCode::num_codes(MAX_WORD_LENGTH), Some(3_486_784_401));
        assert_eq!(FeedbackCode::num_codes(MAX_WORD_LENGTH + 1), None);
        assert_eq!(FeedbackCode::num_codes(usize::MAX), None);
    }

    #[test]
    fn check_rejects_words_that_are_too_long() {
        assert!(matches!(
            FeedbackCode::new(0).check(MAX_WORD_LENGTH + 1),
            Err(WordleError::InvalidFeedback { .. })
        ));
    }

    #[test]
    fn io_errors_convert() {
        let error: WordleError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert_eq!(error, WordleError::Io("missing".to_string()));
    }
}
