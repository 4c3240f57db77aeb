use crate::data::*;
use crate::results::*;
use crate::scorers::{EntropyScorer, WordScorer};
use crate::selector::{GuessSelector, ScoreTable, ScoredGuess};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::mem;
use std::result::Result;
use std::sync::Arc;

/// Settings for a [`Solver`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// When this many candidates or fewer remain, the solver guesses the first candidate instead
    /// of scoring the whole guess vocabulary.
    pub short_circuit_threshold: usize,
    /// Whether to score guesses on the rayon thread pool.
    pub parallel: bool,
    /// The number of turns after which [`play_game`] gives up.
    pub max_turns: Option<u32>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            short_circuit_threshold: 2,
            parallel: true,
            max_turns: None,
        }
    }
}

impl SolverConfig {
    pub fn with_short_circuit_threshold(mut self, threshold: usize) -> Self {
        self.short_circuit_threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_turns(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Where a [`Solver`] is in its turn cycle.
///
/// A turn moves from `SelectingGuess` to `AwaitingFeedback` when a guess is proposed. Applying
/// feedback filters the candidates and moves back to `SelectingGuess`, or to `Solved` if every
/// letter was correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverState {
    SelectingGuess,
    AwaitingFeedback { guess: Arc<str> },
    Solved { turns: u32 },
}

/// The guess chosen for a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub guess: Arc<str>,
    /// The guess's entropy, if the guess vocabulary was scored this turn.
    pub score: Option<f64>,
    /// Every guess's score, if the guess vocabulary was scored this turn.
    pub scores: Option<ScoreTable>,
}

/// What applying feedback did to the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The objective was not found; these candidates remain.
    Narrowed(CandidateSet),
    /// The objective was found after this many turns.
    Solved { turns: u32 },
}

/// A completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Arc<str>,
    pub code: FeedbackCode,
    /// The candidates the guess was chosen against.
    pub candidates: CandidateSet,
}

/// Provides feedback for a guess, e.g. by comparing against a known objective or by asking a
/// user.
pub trait FeedbackSource {
    fn feedback_for(&mut self, guess: &str) -> Result<FeedbackCode, WordleError>;
}

impl<F> FeedbackSource for F
where
    F: FnMut(&str) -> Result<FeedbackCode, WordleError>,
{
    fn feedback_for(&mut self, guess: &str) -> Result<FeedbackCode, WordleError> {
        self(guess)
    }
}

/// Gives feedback against an objective known in advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownAnswer {
    objective: Arc<str>,
}

impl KnownAnswer {
    pub fn new(objective: Arc<str>) -> KnownAnswer {
        KnownAnswer { objective }
    }

    pub fn objective(&self) -> &str {
        &self.objective
    }
}

impl FeedbackSource for KnownAnswer {
    fn feedback_for(&mut self, guess: &str) -> Result<FeedbackCode, WordleError> {
        get_result_for_guess(&self.objective, guess)
    }
}

/// Guesses the objective by repeatedly choosing the guess with the most expected information and
/// keeping only the candidates consistent with the feedback.
///
/// ```
/// use entropy_wordle_solver::*;
///
/// let bank = WordBank::from_iterator(&["cod", "wod", "mod", "zzz"]).unwrap();
/// let mut solver = Solver::new(&bank, &bank, SolverConfig::default()).unwrap();
///
/// let proposal = solver.select_next_guess(None).unwrap();
/// let code = get_result_for_guess("mod", &proposal.guess).unwrap();
/// let outcome = solver.apply_feedback(code).unwrap();
///
/// assert!(matches!(outcome, TurnOutcome::Narrowed(_) | TurnOutcome::Solved { .. }));
/// assert_eq!(solver.turns(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Solver<S = EntropyScorer> {
    guesses: Vec<Arc<str>>,
    candidates: CandidateSet,
    selector: GuessSelector<S>,
    config: SolverConfig,
    state: SolverState,
    turns: u32,
    history: Vec<Turn>,
}

impl Solver<EntropyScorer> {
    /// Constructs a solver that guesses from `guesses` to find one of `candidates`, scoring with
    /// [`EntropyScorer`].
    pub fn new(
        candidates: &WordBank,
        guesses: &WordBank,
        config: SolverConfig,
    ) -> Result<Solver<EntropyScorer>, WordleError> {
        Solver::with_scorer(candidates, guesses, EntropyScorer, config)
    }
}

impl<S> Solver<S>
where
    S: WordScorer + Sync,
{
    /// Constructs a solver that uses the given scorer.
    pub fn with_scorer(
        candidates: &WordBank,
        guesses: &WordBank,
        scorer: S,
        config: SolverConfig,
    ) -> Result<Solver<S>, WordleError> {
        if candidates.is_empty() {
            return Err(WordleError::EmptyVocabulary);
        }
        if !guesses.is_empty() && guesses.word_length() != candidates.word_length() {
            return Err(WordleError::InvalidWordLength {
                expected: candidates.word_length(),
                actual: guesses.word_length(),
            });
        }
        Ok(Solver {
            guesses: guesses.to_vec(),
            candidates: CandidateSet::new(candidates),
            selector: GuessSelector::new(scorer).with_parallel(config.parallel),
            config,
            state: SolverState::SelectingGuess,
            turns: 0,
            history: Vec::new(),
        })
    }

    /// Chooses the next guess.
    ///
    /// If few enough candidates remain, the first candidate is guessed without scoring.
    /// Otherwise every word in the guess vocabulary is scored and the best is chosen, preferring
    /// the earliest in the vocabulary among equal scores. If no guess would reveal anything, the
    /// first candidate is guessed instead.
    ///
    /// `progress` is passed on to [`GuessSelector::score_guesses`].
    pub fn select_next_guess(
        &mut self,
        progress: Option<&(dyn Fn(&ScoredGuess) + Sync)>,
    ) -> Result<Proposal, WordleError> {
        match self.state {
            SolverState::SelectingGuess => {}
            SolverState::AwaitingFeedback { .. } => {
                return Err(WordleError::UnexpectedState(
                    "a guess is already awaiting feedback",
                ))
            }
            SolverState::Solved { .. } => {
                return Err(WordleError::UnexpectedState("the objective was already found"))
            }
        }
        let first_candidate = match self.candidates.first() {
            Some(word) => Arc::clone(word),
            None => return Err(WordleError::EmptyVocabulary),
        };

        let proposal = if self.candidates.len() <= self.config.short_circuit_threshold {
            debug!(
                "Only {} candidates left, guessing {}",
                self.candidates.len(),
                first_candidate
            );
            Proposal {
                guess: first_candidate,
                score: None,
                scores: None,
            }
        } else {
            let (table, best) =
                self.selector
                    .select_best(&self.guesses, &self.candidates, progress)?;
            match best {
                Some(best) if best.score > 0.0 => Proposal {
                    guess: best.word,
                    score: Some(best.score),
                    scores: Some(table),
                },
                _ => {
                    debug!(
                        "No guess tells {} candidates apart, guessing {}",
                        self.candidates.len(),
                        first_candidate
                    );
                    Proposal {
                        score: table.get(&first_candidate).map(|entry| entry.score),
                        guess: first_candidate,
                        scores: Some(table),
                    }
                }
            }
        };
        debug!(
            "Turn {}: guessing {} (score {:?}) against {} candidates",
            self.turns + 1,
            proposal.guess,
            proposal.score,
            self.candidates.len()
        );
        self.state = SolverState::AwaitingFeedback {
            guess: Arc::clone(&proposal.guess),
        };
        Ok(proposal)
    }

    /// Applies the feedback for the pending guess.
    ///
    /// An out-of-range code is rejected with [`WordleError::InvalidFeedback`] and leaves the
    /// guess pending, so the feedback can be given again. Feedback that no candidate could
    /// produce fails with [`WordleError::Contradiction`].
    pub fn apply_feedback(&mut self, code: FeedbackCode) -> Result<TurnOutcome, WordleError> {
        let guess = match &self.state {
            SolverState::AwaitingFeedback { guess } => Arc::clone(guess),
            _ => {
                return Err(WordleError::UnexpectedState(
                    "no guess is awaiting feedback",
                ))
            }
        };
        let code = code.check(self.candidates.word_length())?;

        if code.is_correct() {
            self.turns += 1;
            self.history.push(Turn {
                guess,
                code,
                candidates: self.candidates.clone(),
            });
            self.state = SolverState::Solved { turns: self.turns };
            debug!("Solved in {} turns", self.turns);
            return Ok(TurnOutcome::Solved { turns: self.turns });
        }

        let narrowed = self.candidates.narrow(&guess, code)?;
        self.turns += 1;
        debug!(
            "Feedback {} for {} leaves {} of {} candidates",
            code,
            guess,
            narrowed.len(),
            self.candidates.len()
        );
        let previous = mem::replace(&mut self.candidates, narrowed.clone());
        self.history.push(Turn {
            guess,
            code,
            candidates: previous,
        });
        self.state = SolverState::SelectingGuess;
        Ok(TurnOutcome::Narrowed(narrowed))
    }

    /// Selects a guess, asks `source` for its feedback, and applies it.
    pub fn play_turn<F>(
        &mut self,
        source: &mut F,
        progress: Option<&(dyn Fn(&ScoredGuess) + Sync)>,
    ) -> Result<(Proposal, TurnOutcome), WordleError>
    where
        F: FeedbackSource + ?Sized,
    {
        let proposal = self.select_next_guess(progress)?;
        let code = source.feedback_for(&proposal.guess)?;
        let outcome = self.apply_feedback(code)?;
        Ok((proposal, outcome))
    }

    /// The words that could still be the objective.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.state, SolverState::Solved { .. })
    }

    /// The number of guesses that have received feedback.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Every completed turn, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The words this solver may guess.
    pub fn guess_vocabulary(&self) -> &[Arc<str>] {
        &self.guesses
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

/// Plays turns until the objective is found, or until the solver's `max_turns` is reached.
///
/// Errors from `source`, and contradictory feedback, end the game early.
pub fn play_game<S, F>(
    solver: &mut Solver<S>,
    source: &mut F,
    progress: Option<&(dyn Fn(&ScoredGuess) + Sync)>,
) -> Result<GameResult, WordleError>
where
    S: WordScorer + Sync,
    F: FeedbackSource + ?Sized,
{
    let mut guesses: Vec<Arc<str>> = Vec::new();
    loop {
        if let Some(max_turns) = solver.config().max_turns {
            if solver.turns() >= max_turns {
                return Ok(GameResult::Failure(guesses));
            }
        }
        let (proposal, outcome) = solver.play_turn(source, progress)?;
        guesses.push(proposal.guess);
        if let TurnOutcome::Solved { .. } = outcome {
            return Ok(GameResult::Success(guesses));
        }
    }
}

/// Attempts to guess the given objective, which must be one of `candidates`.
///
/// ```
/// use entropy_wordle_solver::*;
///
/// let bank = WordBank::from_iterator(&["cod", "wod", "mod", "zzz"]).unwrap();
///
/// let result = play_game_with_answer("wod", &bank, &bank, SolverConfig::default());
///
/// assert!(matches!(result, Ok(GameResult::Success(_))));
/// assert_eq!(
///     play_game_with_answer("abc", &bank, &bank, SolverConfig::default()),
///     Err(WordleError::UnknownAnswer("abc".to_string()))
/// );
/// ```
pub fn play_game_with_answer(
    objective: &str,
    candidates: &WordBank,
    guesses: &WordBank,
    config: SolverConfig,
) -> Result<GameResult, WordleError> {
    let objective = candidates.validate_answer(objective)?;
    let mut solver = Solver::new(candidates, guesses, config)?;
    play_game(&mut solver, &mut KnownAnswer::new(objective), None)
}
