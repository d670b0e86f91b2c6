use crate::ui::char_info::CharInfoPanel;

/// Longest id the input line accepts; `u32::MAX` has ten digits.
const MAX_INPUT_DIGITS: usize = 10;

pub struct App {
    should_quit: bool,
    panel: CharInfoPanel,
    /// Digits typed since the last submit.
    input: String,
    input_error: Option<String>,
}

impl App {
    pub fn new(panel: CharInfoPanel) -> Self {
        Self {
            should_quit: false,
            panel,
            input: String::new(),
            input_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn panel(&self) -> &CharInfoPanel {
        &self.panel
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    /// Mount the panel; fetches the initial id, if any.
    pub fn start(&mut self) {
        self.panel.mount();
    }

    pub fn push_digit(&mut self, ch: char) {
        if ch.is_ascii_digit() && self.input.len() < MAX_INPUT_DIGITS {
            self.input.push(ch);
            self.input_error = None;
        }
    }

    pub fn pop_digit(&mut self) {
        self.input.pop();
        self.input_error = None;
    }

    /// Hand the typed id to the panel.
    pub fn submit_input(&mut self) {
        if self.input.is_empty() {
            return;
        }
        match self.input.parse::<u32>() {
            Ok(id) => {
                self.panel.set_character_id(Some(id));
                self.input.clear();
                self.input_error = None;
            }
            Err(_) => {
                self.input_error = Some(format!("'{}' is not a valid character id", self.input));
            }
        }
    }

    /// Set the panel's id to absent. The displayed record stays.
    pub fn clear_character(&mut self) {
        self.input.clear();
        self.input_error = None;
        self.panel.set_character_id(None);
    }

    /// Apply finished fetches. Called on every loop iteration.
    pub fn poll_background(&mut self) {
        self.panel.poll();
    }

    pub fn on_tick(&mut self) {
        self.panel.on_tick();
    }
}
