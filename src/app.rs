use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::system::process::{ProcessSample, SortMode, sort_samples};
use crate::ui::theme::Theme;

const BUBBLE_STEP: usize = 10;
const MIN_BUBBLES: usize = 10;

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub sort_cpu: KeyCode,
    pub sort_memory: KeyCode,
    pub sort_threads: KeyCode,
    pub more_bubbles: KeyCode,
    pub fewer_bubbles: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            sort_cpu: parse_key(&kb.sort_cpu).unwrap_or(KeyCode::Char('c')),
            sort_memory: parse_key(&kb.sort_memory).unwrap_or(KeyCode::Char('m')),
            sort_threads: parse_key(&kb.sort_threads).unwrap_or(KeyCode::Char('t')),
            more_bubbles: parse_key(&kb.more_bubbles).unwrap_or(KeyCode::Char('+')),
            fewer_bubbles: parse_key(&kb.fewer_bubbles).unwrap_or(KeyCode::Char('-')),
        }
    }
}

/// The whole mutable display state. Owned by the event loop and mutated
/// only through `dispatch` and the batch handlers, one event at a time.
pub struct App {
    pub running: bool,
    pub samples: Vec<ProcessSample>,
    pub sort_mode: SortMode,
    pub max_bubbles: usize,
    pub last_error: Option<String>,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
}

impl App {
    pub fn new(config: Config) -> Self {
        App {
            running: true,
            samples: Vec::new(),
            sort_mode: SortMode::from_str_config(&config.general.default_sort),
            max_bubbles: config.general.max_bubbles.max(MIN_BUBBLES),
            last_error: None,
            theme: Theme::default(),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        let code = key.code;
        let kb = &self.keybinds;

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.sort_cpu {
            return Action::SortBy(SortMode::Cpu);
        }
        if code == kb.sort_memory {
            return Action::SortBy(SortMode::Memory);
        }
        if code == kb.sort_threads {
            return Action::SortBy(SortMode::Threads);
        }
        // Unshifted aliases so +/- work without holding shift on common
        // layouts.
        if code == kb.more_bubbles || code == KeyCode::Char('=') {
            return Action::MoreBubbles;
        }
        if code == kb.fewer_bubbles || code == KeyCode::Char('_') {
            return Action::FewerBubbles;
        }

        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SortBy(mode) => {
                // Re-sort the batch we already have; no re-fetch.
                self.sort_mode = mode;
                sort_samples(&mut self.samples, mode);
            }
            Action::MoreBubbles => {
                self.max_bubbles += BUBBLE_STEP;
            }
            Action::FewerBubbles => {
                self.max_bubbles = self.max_bubbles.saturating_sub(BUBBLE_STEP).max(MIN_BUBBLES);
            }
            Action::None => {}
        }
    }

    /// Replaces the batch wholesale and clears any sticky fetch error.
    pub fn on_batch(&mut self, mut samples: Vec<ProcessSample>) {
        sort_samples(&mut samples, self.sort_mode);
        self.samples = samples;
        self.last_error = None;
    }

    /// Records a provider failure. The error is sticky until the next
    /// batch result, success or failure, overwrites it.
    pub fn on_batch_failed(&mut self, error: String) {
        self.last_error = Some(error);
    }
}
