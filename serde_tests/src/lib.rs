#[cfg(test)]
mod tests {
    use entropy_wordle_solver::*;
    use std::error::Error;

    #[test]
    fn score_table_serde() -> Result<(), Box<dyn Error>> {
        let bank = WordBank::from_iterator(vec!["cod", "wod", "mod", "mwc"])?;
        let table = GuessSelector::default().score_guesses(&bank, &bank[0..3], None)?;

        let ser = ron::to_string(&table)?;
        let deser = ron::from_str::<ScoreTable>(&ser)?;

        assert_eq!(deser.best().map(|best| best.index), Some(3));
        assert_eq!(deser.len(), table.len());
        Ok(())
    }

    #[test]
    fn game_result_serde() -> Result<(), Box<dyn Error>> {
        let bank = WordBank::from_iterator(vec!["cod", "wod", "mod", "zzz"])?;
        let result = play_game_with_answer("mod", &bank, &bank, SolverConfig::default())?;

        let ser = ron::to_string(&result)?;
        let deser = ron::from_str::<GameResult>(&ser)?;

        assert_eq!(deser, result);
        Ok(())
    }

    #[test]
    fn solver_config_serde() -> Result<(), Box<dyn Error>> {
        let config = SolverConfig::default()
            .with_max_turns(Some(6))
            .with_parallel(false);

        let deser = ron::from_str::<SolverConfig>(&ron::to_string(&config)?)?;

        assert_eq!(deser, config);
        Ok(())
    }

    #[test]
    fn feedback_code_serde() -> Result<(), Box<dyn Error>> {
        let code = get_result_for_guess("aab", "aba")?;

        let deser = ron::from_str::<FeedbackCode>(&ron::to_string(&code)?)?;

        assert_eq!(deser, code);
        assert_eq!(deser.to_results(3)[0], LetterResult::Correct);
        Ok(())
    }
}
