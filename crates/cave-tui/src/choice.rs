//! Menu prompts for the full-screen front end
//!
//! While a command runs, the core may ask the player to pick between options
//! (take the pickaxe, mine the rocks). [`TerminalChooser`] answers those
//! prompts by drawing a [`ChoicePopup`] over the last frame and blocking on
//! key events until the player decides.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;

use cave_core::action::ChoiceProvider;

use crate::theme::Theme;
use crate::widgets::ChoiceWidget;

/// Cursor-driven menu state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoicePopup {
    prompt: String,
    notes: Vec<String>,
    options: Vec<String>,
    cursor: usize,
}

impl ChoicePopup {
    pub fn new(prompt: &str, options: &[&str]) -> Self {
        Self::with_options(prompt, options)
    }

    /// Build a menu from anything printable, such as a strum enum iterator
    pub fn with_options<I, T>(prompt: &str, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self {
            prompt: prompt.to_string(),
            notes: Vec::new(),
            options: options.into_iter().map(|opt| opt.to_string()).collect(),
            cursor: 0,
        }
    }

    /// Lines shown above the options. A line equal to the prompt is skipped
    /// since it already titles the popup.
    pub fn with_notes(mut self, notes: &[String]) -> Self {
        self.notes = notes
            .iter()
            .filter(|note| **note != self.prompt)
            .cloned()
            .collect();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the last option, which is the "do nothing" answer
    pub fn cancel_index(&self) -> usize {
        self.options.len().saturating_sub(1)
    }

    /// Feed a key press; returns the chosen index once the player decides.
    ///
    /// Digits pick an option directly, arrows and Tab move the cursor, Enter
    /// confirms the cursor and Esc picks the last option.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<usize> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let count = self.options.len();
        if count == 0 {
            return Some(0);
        }
        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.cursor = (self.cursor + count - 1) % count;
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.cursor = (self.cursor + 1) % count;
                None
            }
            KeyCode::Enter => Some(self.cursor),
            KeyCode::Esc => Some(self.cancel_index()),
            KeyCode::Char(c) => {
                let digit = c.to_digit(10)? as usize;
                (1..=count).contains(&digit).then(|| digit - 1)
            }
            _ => None,
        }
    }
}

/// Where the chooser gets its input from
pub trait EventSource {
    /// Block until the next terminal event
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Scripted events, used by tests and replays
impl EventSource for std::vec::IntoIter<Event> {
    fn next_event(&mut self) -> io::Result<Event> {
        self.next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
    }
}

/// Answers prompts with a popup drawn over `backdrop`
pub struct TerminalChooser<'a, B: Backend, E: EventSource> {
    terminal: &'a mut Terminal<B>,
    events: E,
    backdrop: Buffer,
    theme: Theme,
}

impl<'a, B: Backend, E: EventSource> TerminalChooser<'a, B, E> {
    /// `backdrop` is the last completed frame, usually cloned from the
    /// buffer returned by `Terminal::draw`
    pub fn new(terminal: &'a mut Terminal<B>, events: E, backdrop: Buffer, theme: Theme) -> Self {
        Self {
            terminal,
            events,
            backdrop,
            theme,
        }
    }

    fn run_popup(&mut self, popup: &mut ChoicePopup) -> io::Result<usize> {
        loop {
            let backdrop = &self.backdrop;
            let theme = &self.theme;
            let shown = &*popup;
            self.terminal.draw(|frame| {
                let area = frame.area();
                paint_backdrop(frame.buffer_mut(), backdrop);
                frame.render_widget(ChoiceWidget::new(shown, theme), area);
            })?;

            if let Event::Key(key) = self.events.next_event()?
                && let Some(choice) = popup.handle_key(key)
            {
                return Ok(choice);
            }
        }
    }
}

/// Copy the overlapping part of `backdrop` into `buf`
fn paint_backdrop(buf: &mut Buffer, backdrop: &Buffer) {
    let area = buf.area.intersection(backdrop.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)] = backdrop[(x, y)].clone();
        }
    }
}

impl<B: Backend, E: EventSource> ChoiceProvider for TerminalChooser<'_, B, E> {
    fn choose(&mut self, context: &[String], prompt: &str, options: &[&str]) -> usize {
        let mut popup = ChoicePopup::new(prompt, options).with_notes(context);
        match self.run_popup(&mut popup) {
            Ok(choice) => {
                log::debug!("{:?} -> {:?}", prompt, options.get(choice));
                choice
            }
            Err(e) => {
                log::error!("prompt {:?} aborted: {}", prompt, e);
                popup.cancel_index()
            }
        }
    }
}
