use clap::{Parser, Subcommand};
use entropy_wordle_solver::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::Write;
use std::time::Instant;

/// Simple program to run a Wordle game in reverse, where the computer guesses the word by
/// maximizing the expected information of each guess.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Path to a file of words the solver may guess. Defaults to the words file.
    #[clap(short = 'g', long)]
    guesses_file: Option<String>,

    /// Only words with this many letters are read from the word files.
    #[clap(short = 'l', long, default_value_t = 5)]
    word_length: usize,

    /// Score guesses on a single thread.
    #[clap(long)]
    sequential: bool,

    /// How many of the best guesses to show each turn.
    #[clap(long, default_value_t = 10)]
    top: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against every word in the given words file.
    Benchmark,
    /// Run a single game with the given word. Prompts for the word if it is not given.
    Single { word: Option<String> },
    /// Run an interactive game against the solver.
    Interactive,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    println!("File: {}", args.words_file);

    let candidates = read_word_bank(&args.words_file, args.word_length)?;
    let guesses = match &args.guesses_file {
        Some(guesses_file) => read_word_bank(guesses_file, args.word_length)?,
        None => candidates.clone(),
    };
    println!(
        "There are {} possible words and {} allowed guesses.",
        candidates.len(),
        guesses.len()
    );
    let config = SolverConfig::default().with_parallel(!args.sequential);

    match args.command {
        Command::Benchmark => run_benchmark(&candidates, &guesses, config)?,
        Command::Single { word } => {
            play_single_game(word, &candidates, &guesses, config, args.top)?
        }
        Command::Interactive => play_interactive_game(&candidates, &guesses, config, args.top)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn read_word_bank(path: &str, word_length: usize) -> Result<WordBank, WordleError> {
    let words_reader = io::BufReader::new(File::open(path)?);
    let bank = WordBank::from_reader_with_length(words_reader, word_length)?;
    info!("Read {} words of length {} from {}", bank.len(), word_length, path);
    Ok(bank)
}

fn run_benchmark(
    candidates: &WordBank,
    guesses: &WordBank,
    config: SolverConfig,
) -> Result<(), WordleError> {
    let mut num_guesses_per_game: Vec<u32> = Vec::new();
    let bar = ProgressBar::new(candidates.len() as u64);
    for word in candidates.iter() {
        match play_game_with_answer(word, candidates, guesses, config.clone())? {
            GameResult::Success(made) => num_guesses_per_game.push(made.len() as u32),
            GameResult::Failure(made) => {
                bar.println(format!("Failed to solve {} in {} guesses", word, made.len()))
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    println!("Solved {} words. Results:", num_guesses_per_game.len());
    if num_guesses_per_game.is_empty() {
        return Ok(());
    }

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds = num_games_per_round.keys().copied().collect::<Vec<u32>>();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games_per_round[num_round]);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

fn play_single_game(
    word: Option<String>,
    candidates: &WordBank,
    guesses: &WordBank,
    config: SolverConfig,
    top: usize,
) -> Result<(), Box<dyn Error>> {
    let objective = match word {
        Some(word) => candidates.validate_answer(&word)?,
        None => prompt_for_answer(candidates)?,
    };
    let mut solver = Solver::new(candidates, guesses, config)?;
    let turns = play_with_display(&mut solver, &mut KnownAnswer::new(objective), top)?;
    println!("Solved it! It took me {} guesses.", turns);
    for turn in solver.history() {
        println!("\t{}", turn.guess);
    }
    Ok(())
}

fn prompt_for_answer(candidates: &WordBank) -> Result<std::sync::Arc<str>, Box<dyn Error>> {
    loop {
        print!("Enter the {} letter word: ", candidates.word_length());
        io::stdout().flush()?;
        let input = read_line()?;
        match candidates.validate_answer(&input) {
            Ok(objective) => return Ok(objective),
            Err(
                e @ (WordleError::InvalidWordLength { .. }
                | WordleError::UnknownAnswer(_)
                | WordleError::UnsupportedCharacter(_)),
            ) => println!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }
}

fn play_interactive_game(
    candidates: &WordBank,
    guesses: &WordBank,
    config: SolverConfig,
    top: usize,
) -> Result<(), Box<dyn Error>> {
    let mut solver = Solver::new(candidates, guesses, config)?;
    println!("Choose a word from the word-list. Press enter once you've chosen.");
    read_line()?;

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\"");

    let mut source = |guess: &str| -> Result<FeedbackCode, WordleError> {
        loop {
            match read_feedback(guess) {
                Ok(code) => return Ok(code),
                Err(e) if e.kind() == io::ErrorKind::InvalidInput => println!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }
    };
    match play_with_display(&mut solver, &mut source, top) {
        Ok(turns) => println!("I did it! It took me {} guesses.", turns),
        Err(WordleError::Contradiction { .. }) => {
            println!("None of the words I know match that feedback :(")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Plays until solved, printing the candidates and the best guesses each turn.
fn play_with_display<F>(
    solver: &mut Solver,
    source: &mut F,
    top: usize,
) -> Result<u32, WordleError>
where
    F: FeedbackSource,
{
    loop {
        println!("{}", "*".repeat(50));
        let candidates = solver.candidates();
        println!(
            "There are {} candidates left (e.g. {})",
            candidates.len(),
            candidates
                .iter()
                .take(10)
                .map(|word| &**word)
                .collect::<Vec<&str>>()
                .join(", ")
        );

        let bar = match num_guesses_to_score(solver) {
            0 => ProgressBar::hidden(),
            num_guesses => ProgressBar::new(num_guesses).with_style(
                ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {elapsed}"),
            ),
        };
        let progress = |_: &ScoredGuess| bar.inc(1);
        let proposal = solver.select_next_guess(Some(&progress))?;
        bar.finish_and_clear();

        if let Some(scores) = &proposal.scores {
            println!("The best guesses are:");
            for entry in scores.top(top) {
                println!("\t{}: {:.4}", entry.word, entry.score);
            }
        }
        println!("I'm guessing: {}", proposal.guess);

        let code = source.feedback_for(&proposal.guess)?;
        if let TurnOutcome::Solved { turns } = solver.apply_feedback(code)? {
            return Ok(turns);
        }
    }
}

fn num_guesses_to_score(solver: &Solver) -> u64 {
    if solver.candidates().len() <= solver.config().short_circuit_threshold {
        0
    } else {
        solver.guess_vocabulary().len() as u64
    }
}

fn read_line() -> io::Result<String> {
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Input ended before the game did.",
        ));
    }
    Ok(buffer.trim().to_string())
}

fn read_feedback(guess: &str) -> io::Result<FeedbackCode> {
    print!("How did I do? ");
    io::stdout().flush()?;
    let input = read_line()?;

    if guess.len() != input.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Input {} didn't match the length of my guess. Try again.",
                input
            ),
        ));
    }

    let results = input
        .chars()
        .map(|letter| match letter {
            '.' => Ok(LetterResult::NotPresent),
            'y' => Ok(LetterResult::PresentNotHere),
            'g' => Ok(LetterResult::Correct),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Must enter only the letters '.', 'y', or 'g'. Try again.",
            )),
        })
        .collect::<io::Result<Vec<LetterResult>>>()?;
    FeedbackCode::from_results(&results)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
}
