//! Input Controller
//!
//! Owns the live input line and drives history, completion, dispatch and
//! rendering from key events.
//!
//! ## States
//!
//! ```text
//!                  Enter (non-empty)
//!  AwaitingInput ───────────────────▶ Submitting(cmd)
//!        ▲                                  │
//!        └────────── settle(result) ────────┘
//! ```
//!
//! While `Submitting` there is no editable input line and every key is
//! ignored, so only one command is ever in flight. Hosts that cannot hold
//! `&mut self` across an await (a GUI frame loop) drive the two halves
//! separately with [`InputController::handle_key`] and
//! [`InputController::settle`]; everything else can use
//! [`InputController::press`], which awaits the dispatcher itself.
//!
//! No timeout is applied while `Submitting`: if the executor never answers,
//! the controller stays there.

use std::sync::Arc;

use crate::completion::{CompletionOutcome, SuggestionCache};
use crate::config::UiConfig;
use crate::error::{Error, Result};
use crate::execution::{CommandDispatcher, DispatchResult};
use crate::history::HistoryLog;
use crate::models::{Command, InputLine};
use crate::terminal::input::{apply_editing_key, Key};
use crate::terminal::output::OutputRenderer;

/// Default input-ready marker
pub const DEFAULT_PROMPT: &str = "> ";

/// Controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
    /// An editable input line exists and accepts keys
    AwaitingInput,
    /// The line is frozen and `Command` is with the dispatcher
    Submitting(Command),
}

/// What a key event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The command must be dispatched, then passed to `settle`
    Submit(Command),
    /// Blank line submitted; a fresh prompt is showing
    PromptCycled,
    /// A history entry replaced the input
    Recalled,
    /// The completion token was replaced by the only candidate
    Completed,
    /// Several candidates were rendered and the prompt re-shown
    CandidatesShown,
    /// A plain editing key changed the line
    Edited,
    /// The key had nothing to do
    Unchanged,
    /// No editable line exists (a command is in flight)
    Ignored,
}

/// Per-terminal interaction engine
pub struct InputController {
    /// Executor access
    dispatcher: Arc<dyn CommandDispatcher>,
    /// Scrollback owner
    renderer: OutputRenderer,
    /// Submitted commands
    history: HistoryLog,
    /// Completion candidates
    suggestions: SuggestionCache,
    /// The editable line; `None` while submitting
    input: Option<InputLine>,
    /// Current state
    state: ControllerState,
    /// Input-ready marker
    prompt: String,
}

impl InputController {
    /// Create a controller with the default prompt and show the first prompt
    pub fn new(dispatcher: Arc<dyn CommandDispatcher>) -> Self {
        Self::with_prompt(dispatcher, DEFAULT_PROMPT)
    }

    /// Create a controller with a custom prompt marker
    pub fn with_prompt(dispatcher: Arc<dyn CommandDispatcher>, prompt: impl Into<String>) -> Self {
        Self {
            dispatcher,
            renderer: OutputRenderer::new(),
            history: HistoryLog::new(),
            suggestions: SuggestionCache::new(),
            input: Some(InputLine::new()),
            state: ControllerState::AwaitingInput,
            prompt: prompt.into(),
        }
    }

    /// Create a controller from UI settings, rendering the banner if any
    pub fn from_config(dispatcher: Arc<dyn CommandDispatcher>, config: &UiConfig) -> Self {
        let mut controller = Self::with_prompt(dispatcher, config.prompt.clone());
        if let Some(banner) = &config.banner {
            controller.renderer.append(banner);
        }
        controller
    }

    /// Handle one key synchronously
    ///
    /// Enter on a non-empty line freezes it, echoes a blank separator,
    /// records the command and returns [`KeyOutcome::Submit`]; the caller
    /// then dispatches and calls [`settle`](Self::settle).
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.state != ControllerState::AwaitingInput {
            trace!("Ignoring {:?} while a command is in flight", key);
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Enter => self.handle_enter(),
            Key::ArrowUp => self.handle_recall(true),
            Key::ArrowDown => self.handle_recall(false),
            Key::Tab => self.handle_tab(),
            other => match self.input.as_mut() {
                Some(line) => {
                    if apply_editing_key(line, other) {
                        KeyOutcome::Edited
                    } else {
                        KeyOutcome::Unchanged
                    }
                }
                None => KeyOutcome::Ignored,
            },
        }
    }

    /// Finish the in-flight command with its dispatch result
    ///
    /// Renders the result, refreshes completion candidates after a
    /// successful listing command, and shows a fresh prompt.
    pub fn settle(&mut self, result: DispatchResult) -> Result<()> {
        let command = match std::mem::replace(&mut self.state, ControllerState::AwaitingInput) {
            ControllerState::Submitting(command) => command,
            ControllerState::AwaitingInput => return Err(Error::NoCommandInFlight),
        };

        self.renderer.append(&result.render_text());
        match &result {
            DispatchResult::Success(output) => {
                self.suggestions.refresh(command.as_str(), output);
            }
            DispatchResult::Failure(description) => {
                debug!("'{}' failed: {}", command, description);
            }
        }

        self.show_prompt(String::new());
        Ok(())
    }

    /// Handle one key, awaiting the dispatcher when it submits a command
    pub async fn press(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.handle_key(key);
        if let KeyOutcome::Submit(command) = &outcome {
            let dispatcher = Arc::clone(&self.dispatcher);
            let result = dispatcher.dispatch(command.as_str()).await;
            if let Err(e) = self.settle(result) {
                error!("Dispatch settled out of order: {}", e);
            }
        }
        outcome
    }

    /// Type `text` into the live line and press Enter
    pub async fn submit_line(&mut self, text: &str) -> KeyOutcome {
        if !self.set_input_text(text) {
            return KeyOutcome::Ignored;
        }
        self.press(Key::Enter).await
    }

    /// Replace the live line's text (hosts whose widget edits text itself)
    ///
    /// Returns `false` when no editable line exists.
    pub fn set_input_text(&mut self, text: &str) -> bool {
        match self.input.as_mut() {
            Some(line) if line.text() != text => line.set_text(text),
            Some(_) => true,
            None => false,
        }
    }

    fn handle_enter(&mut self) -> KeyOutcome {
        let text = self.freeze_input();

        match Command::parse(&text) {
            None => {
                self.show_prompt(String::new());
                KeyOutcome::PromptCycled
            }
            Some(command) => {
                info!("Submitting '{}'", command);
                self.renderer.append("");
                self.history.record(command.as_str());
                self.state = ControllerState::Submitting(command.clone());
                KeyOutcome::Submit(command)
            }
        }
    }

    fn handle_recall(&mut self, previous: bool) -> KeyOutcome {
        let recalled = if previous {
            self.history.recall_previous()
        } else {
            self.history.recall_next()
        };

        match (recalled, self.input.as_mut()) {
            (Some(text), Some(line)) => {
                line.set_text(text);
                KeyOutcome::Recalled
            }
            (None, Some(line)) => {
                line.move_end();
                KeyOutcome::Unchanged
            }
            (_, None) => KeyOutcome::Ignored,
        }
    }

    fn handle_tab(&mut self) -> KeyOutcome {
        let Some(line) = self.input.as_mut() else {
            return KeyOutcome::Ignored;
        };

        match self.suggestions.complete(line.text()) {
            CompletionOutcome::NoMatch => KeyOutcome::Unchanged,
            CompletionOutcome::SingleMatch(completed) => {
                line.set_text(completed);
                KeyOutcome::Completed
            }
            outcome @ CompletionOutcome::Ambiguous(_) => {
                let text = self.freeze_input();
                if let Some(rendered) = outcome.render() {
                    self.renderer.append(&rendered);
                }
                self.show_prompt(text);
                KeyOutcome::CandidatesShown
            }
        }
    }

    /// Freeze the live line, echo it into the scrollback and return its text
    fn freeze_input(&mut self) -> String {
        match self.input.take() {
            Some(mut line) => {
                let text = line.freeze().to_string();
                self.renderer.echo_prompt(&self.prompt, &text);
                text
            }
            None => String::new(),
        }
    }

    /// Create the next editable line
    fn show_prompt(&mut self, text: String) {
        self.input = Some(InputLine::with_text(text));
    }

    /// Current state
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Whether an editable line exists
    pub fn is_awaiting_input(&self) -> bool {
        self.state == ControllerState::AwaitingInput
    }

    /// The editable line, if one exists
    pub fn input(&self) -> Option<&InputLine> {
        self.input.as_ref()
    }

    /// Text of the editable line, if one exists
    pub fn input_text(&self) -> Option<&str> {
        self.input.as_ref().map(InputLine::text)
    }

    /// Input-ready marker
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Scrollback renderer
    pub fn renderer(&self) -> &OutputRenderer {
        &self.renderer
    }

    /// Mutable scrollback renderer (hosts consume scroll requests here)
    pub fn renderer_mut(&mut self) -> &mut OutputRenderer {
        &mut self.renderer
    }

    /// Submitted commands
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Completion candidates
    pub fn suggestions(&self) -> &SuggestionCache {
        &self.suggestions
    }

    /// Replace the completion candidates
    pub fn set_suggestions(&mut self, suggestions: SuggestionCache) {
        self.suggestions = suggestions;
    }

    /// Shared handle to the dispatcher, for hosts that run dispatches
    /// on their own executor
    pub fn dispatcher(&self) -> Arc<dyn CommandDispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
