#[macro_use]
extern crate assert_matches;

use entropy_wordle_solver::*;
use rand::Rng;

fn results_for(objective: &str, guess: &str) -> Result<Vec<LetterResult>, WordleError> {
    get_result_for_guess(objective, guess).map(|code| code.to_results(guess.len()))
}

#[test]
fn get_result_for_guess_correct() {
    let result = get_result_for_guess("abcb", "abcb");

    assert_matches!(result, Ok(code) if code.is_correct());
    assert_eq!(
        results_for("abcb", "abcb"),
        Ok(vec![LetterResult::Correct; 4])
    );
}

#[test]
fn get_result_for_guess_partial() {
    assert_eq!(
        results_for("mesas", "sassy"),
        Ok(vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ])
    );
    assert_eq!(
        results_for("abba", "babb"),
        Ok(vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent
        ])
    );
    assert_eq!(
        results_for("abcb", "bcce"),
        Ok(vec![
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::Correct,
            LetterResult::NotPresent
        ])
    );
}

#[test]
fn get_result_for_guess_duplicate_letters() {
    // 0 + 1 * 3 + 1 * 9
    assert_eq!(get_result_for_guess("aab", "aba"), Ok(FeedbackCode::new(12)));
    // The exact match on the last 'a' is found before the first 'a' looks elsewhere.
    assert_eq!(
        results_for("xya", "aza"),
        Ok(vec![
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::Correct
        ])
    );
}

#[test]
fn get_result_for_guess_none_match() {
    assert_eq!(
        get_result_for_guess("abcb", "defg"),
        Ok(FeedbackCode::new(2 + 2 * 3 + 2 * 9 + 2 * 27))
    );
}

#[test]
fn get_result_for_guess_invalid_guess() {
    assert_matches!(
        get_result_for_guess("goal", "guess"),
        Err(WordleError::InvalidWordLength {
            expected: 4,
            actual: 5
        })
    );
}

#[test]
fn get_result_for_guess_is_correct_iff_equal() {
    let mut rng = rand::thread_rng();
    for _ in 0..2000 {
        let objective: String = (0..4).map(|_| rng.gen_range('a'..='c')).collect();
        let guess: String = (0..4).map(|_| rng.gen_range('a'..='c')).collect();

        let code = get_result_for_guess(&objective, &guess).unwrap();

        assert_eq!(code.is_correct(), objective == guess, "{} vs {}", objective, guess);
        assert!(code.value() < FeedbackCode::num_codes(4).unwrap());
    }
}

#[test]
fn feedback_code_round_trips_results() -> Result<(), WordleError> {
    let results = vec![
        LetterResult::NotPresent,
        LetterResult::Correct,
        LetterResult::PresentNotHere,
        LetterResult::NotPresent,
        LetterResult::Correct,
    ];

    let code = FeedbackCode::from_results(&results)?;

    assert_eq!(code, FeedbackCode::new(2 + 0 * 3 + 1 * 9 + 2 * 27 + 0 * 81));
    assert_eq!(code.to_results(5), results);
    Ok(())
}

#[test]
fn feedback_code_too_long() {
    assert_matches!(
        FeedbackCode::from_results(&[LetterResult::Correct; MAX_WORD_LENGTH]),
        Ok(_)
    );
    assert_matches!(
        FeedbackCode::from_results(&[LetterResult::Correct; MAX_WORD_LENGTH + 1]),
        Err(WordleError::InvalidWordLength {
            expected: MAX_WORD_LENGTH,
            actual: _
        })
    );
}
