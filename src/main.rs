use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::game::input::Input;
use crate::game::quiz::definition::QuizDefinition;
use crate::game::quiz::settings::Settings as QuizSettings;
use crate::game::settings::Settings as GameSettings;
use crate::game::Game;
use crate::output::terminal::TerminalOutput;

mod game;
mod output;


#[derive(Parser, Debug)]
#[command(author, version, about = "Multiple-choice quiz loaded from a CSV file", long_about = None)]
struct Cli {
    /// CSV file with columns question, optionA..optionD, answer.
    #[arg(default_value = "question.csv")]
    questions: PathBuf,
    /// How long answer feedback stays on screen, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    feedback_ms: u64,
    /// Minimum score (out of 100) that earns praise.
    #[arg(long, default_value_t = 80.0)]
    pass_threshold: f64,
    /// Time between two frames, in milliseconds.
    #[arg(long, default_value_t = 33)]
    frame_ms: u64,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// Forwards every well-formed command line to `sender`. Returns once the
/// reader is exhausted or the receiving side is gone.
fn forward_inputs<R: BufRead>(reader: R, sender: &Sender<Input>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not read input: {}", e);
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Input>() {
            Ok(input) => {
                if sender.send(input).is_err() {
                    return;
                }
            }
            Err(e) => warn!("Rejected input {:?}: {:#}", line.trim(), e),
        }
    }
}

fn spawn_input_reader() -> Receiver<Input> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        forward_inputs(stdin.lock(), &sender);
        sender.send(Input::Quit).ok();
    });
    receiver
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let definition = QuizDefinition::open(&cli.questions)
        .with_context(|| format!("Could not load quiz from {}", cli.questions.display()))?;
    info!(
        "Loaded {} questions from {}",
        definition.len(),
        cli.questions.display()
    );

    let quiz_settings = QuizSettings {
        feedback_duration: Duration::from_millis(cli.feedback_ms),
        pass_threshold: cli.pass_threshold,
    };
    let game_settings = GameSettings {
        frame_interval: Duration::from_millis(cli.frame_ms),
    };

    let output = TerminalOutput::new(std::io::stdout());
    let mut game = Game::new(definition, quiz_settings, output);
    let inputs = spawn_input_reader();

    let mut last_tick = Instant::now();
    while !game.is_closed() {
        loop {
            match inputs.try_recv() {
                Ok(input) => game.handle(input)?,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    game.handle(Input::Quit)?;
                    break;
                }
            }
        }

        let now = Instant::now();
        game.tick(now.duration_since(last_tick))?;
        last_tick = now;

        thread::sleep(game_settings.frame_interval);
    }

    info!("Goodbye");
    Ok(())
}
