//! Line-oriented console front end
//!
//! Prints the board and reads one line per command, the way the game plays
//! on a bare terminal. Input and output are generic so whole sessions can be
//! replayed from a string.

use std::io::{self, BufRead, Write};

use strum::IntoEnumIterator;

use cave_core::action::{ChoiceProvider, Command};
use cave_core::dungeon::MapDescription;
use cave_core::world::GameConfig;
use cave_core::{GameLoop, GameLoopResult, GameState, INTRO};

use crate::app::{ReplayOption, TitleOption};
use crate::{BANNER, WELCOME};

/// Key help printed under the board
const KEY_HELP: [&str; 2] = [
    "Move:   W       Inspect: E       Inventory: I       Quit: Q",
    "      A S D",
];

/// Console session over any reader and writer
pub struct PlainUi<R, W> {
    input: R,
    output: W,
    /// Messages of the running command already printed by a prompt
    printed: usize,
}

impl<R: BufRead, W: Write> PlainUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            printed: 0,
        }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its line ending; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    /// Read lines until one is exactly a single character from `valid`.
    ///
    /// Blank lines, longer lines and other characters are skipped silently.
    pub fn read_char(&mut self, valid: &str) -> io::Result<Option<char>> {
        while let Some(line) = self.read_line()? {
            let mut chars = line.chars();
            if let (Some(c), None) = (chars.next(), chars.next())
                && valid.contains(c)
            {
                return Ok(Some(c));
            }
        }
        Ok(None)
    }

    /// Read lines until one is an integer in `min..=max`.
    ///
    /// Only an optional leading `-` followed by digits is accepted.
    pub fn read_int(&mut self, min: i64, max: i64) -> io::Result<Option<i64>> {
        while let Some(line) = self.read_line()? {
            if let Some(n) = parse_int(&line)
                && (min..=max).contains(&n)
            {
                return Ok(Some(n));
            }
        }
        Ok(None)
    }

    /// Print a numbered menu and return the 0-based index picked
    pub fn menu<T: ToString>(&mut self, options: &[T]) -> io::Result<Option<usize>> {
        writeln!(self.output)?;
        for (i, opt) in options.iter().enumerate() {
            write!(self.output, "{}. {}\n\n", i + 1, opt.to_string())?;
        }
        self.output.flush()?;

        let max = i64::try_from(options.len()).unwrap_or(i64::MAX);
        let choice = self.read_int(1, max)?;
        Ok(choice.and_then(|n| usize::try_from(n - 1).ok()))
    }

    /// Banner, title and main menu, then rounds until the player quits
    pub fn run(&mut self, config: &GameConfig, map: &MapDescription) -> io::Result<()> {
        for line in BANNER {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "\n{}", WELCOME)?;

        let options: Vec<TitleOption> = TitleOption::iter().collect();
        match self.menu(&options)?.and_then(|i| options.get(i).copied()) {
            Some(TitleOption::Play) => {}
            Some(TitleOption::Exit) | None => return Ok(()),
        }

        let replay: Vec<ReplayOption> = ReplayOption::iter().collect();
        loop {
            if self.play_round(config, map)?.is_none() {
                return Ok(());
            }
            match self.menu(&replay)?.and_then(|i| replay.get(i).copied()) {
                Some(ReplayOption::PlayAgain) => {}
                Some(ReplayOption::Quit) | None => return Ok(()),
            }
        }
    }

    /// Play one round; `None` when input ran out before it finished
    pub fn play_round(
        &mut self,
        config: &GameConfig,
        map: &MapDescription,
    ) -> io::Result<Option<GameLoopResult>> {
        let mut game = GameLoop::new(GameState::new(map, config));

        for line in INTRO {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)?;

        loop {
            self.print_turn(game.state())?;

            let Some(key) = self.read_char(Command::VALID_KEYS)? else {
                log::info!("input closed mid-round");
                return Ok(None);
            };
            let Some(command) = Command::from_key(key) else {
                continue;
            };

            self.printed = 0;
            let result = game.tick(command, self);
            let messages = game.state().messages();
            for msg in messages.get(self.printed..).unwrap_or_default() {
                writeln!(self.output, "{}", msg)?;
            }
            if result.is_over() {
                self.output.flush()?;
                return Ok(Some(result));
            }
        }
    }

    fn print_turn(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.output, "{} steps remaining", state.steps_left())?;
        writeln!(self.output, "{}", state.board.render())?;
        writeln!(self.output)?;
        for line in KEY_HELP {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()
    }

    /// Print the command's messages not shown yet, then the prompt unless
    /// it was one of them
    fn print_context(&mut self, context: &[String], prompt: &str) -> io::Result<()> {
        for msg in context.get(self.printed..).unwrap_or_default() {
            writeln!(self.output, "{}", msg)?;
        }
        self.printed = self.printed.max(context.len());
        if !context.iter().any(|msg| msg == prompt) {
            writeln!(self.output, "{}", prompt)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> ChoiceProvider for PlainUi<R, W> {
    fn choose(&mut self, context: &[String], prompt: &str, options: &[&str]) -> usize {
        let decline = options.len().saturating_sub(1);
        let answer = self
            .print_context(context, prompt)
            .and_then(|()| self.menu(options));
        match answer {
            Ok(Some(choice)) => choice,
            Ok(None) => decline,
            Err(e) => {
                log::error!("prompt {:?} aborted: {}", prompt, e);
                decline
            }
        }
    }
}

/// Strict integer parse: optional `-`, then at least one digit and nothing else
fn parse_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
