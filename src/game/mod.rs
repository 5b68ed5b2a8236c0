use anyhow::Result;
use std::time::Duration;
use tracing::{info, warn};

pub mod input;
pub mod layout;
pub mod quiz;
pub mod settings;


use self::input::Input;
use self::layout::{Hit, Layout};
use self::quiz::definition::{Label, QuizDefinition};
use self::quiz::scheduler::TickScheduler;
use self::quiz::{Quiz, SelectOutcome, Snapshot};
use crate::output::QuizOutput;

/// Hosts one quiz session: routes player input to the quiz, fires its
/// timers from the frame loop and redraws whenever the quiz changed.
pub struct Game<O: QuizOutput> {
    quiz: Quiz<TickScheduler>,
    layout: Layout,
    output: O,
    last_drawn: Option<Snapshot>,
    closed: bool,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(definition: QuizDefinition, settings: quiz::settings::Settings, output: O) -> Self {
        info!("Starting quiz with {} questions", definition.len());
        Game {
            quiz: Quiz::new(definition, settings, TickScheduler::new()),
            layout: Default::default(),
            output,
            last_drawn: None,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn handle(&mut self, input: Input) -> Result<()> {
        match input {
            Input::Select(label) => self.select(label),
            Input::Click { x, y } => match self.layout.hit_test(&self.quiz.snapshot(), x, y) {
                Some(Hit::Option(label)) => self.select(label),
                Some(Hit::Restart) => self.restart(),
                None => (),
            },
            Input::Restart => self.restart(),
            Input::Quit => self.closed = true,
        }
        self.redraw()
    }

    fn select(&mut self, label: Label) {
        match self.quiz.select_option(label) {
            Ok(SelectOutcome::Ignored) => (),
            Ok(outcome) => info!("Answered {}: {:?}", label, outcome),
            Err(e) => warn!("{}", e),
        }
    }

    fn restart(&mut self) {
        info!("Restarting quiz");
        self.quiz.restart();
    }

    pub fn tick(&mut self, dt: Duration) -> Result<()> {
        let was_over = self.quiz.is_over();
        let due = self.quiz.get_scheduler_mut().tick(dt);
        for timer in due {
            self.quiz.on_timer(timer);
        }
        if !was_over {
            if let Some(score) = self.quiz.snapshot().score() {
                info!("Quiz over, final score: {:.0}", score);
            }
        }
        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        let snapshot = self.quiz.snapshot();
        if self.last_drawn.as_ref() == Some(&snapshot) {
            return Ok(());
        }
        self.output.draw(&snapshot)?;
        self.last_drawn = Some(snapshot);
        Ok(())
    }
}
