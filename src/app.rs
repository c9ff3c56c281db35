//! WebTerm application
//!
//! The `eframe` host for an [`InputController`]. The controller lives on the
//! UI thread; each submitted command is dispatched on a Tokio worker and its
//! result comes back over a channel that is drained at the start of every
//! frame.

use std::sync::Arc;

use eframe::egui;
use tokio::sync::mpsc;

use crate::config::{Config, UiConfig};
use crate::error::Result;
use crate::execution::http::HttpDispatcher;
use crate::execution::{CommandDispatcher, DispatchResult};
use crate::models::Command;
use crate::terminal::{InputController, Key, KeyOutcome};
use crate::ui::{ControlKeys, InputField, TerminalColors, TerminalViewport};

/// Main application window
pub struct WebTermApp {
    controller: InputController,
    viewport: TerminalViewport,
    input_field: InputField,
    runtime: tokio::runtime::Runtime,
    result_tx: mpsc::UnboundedSender<DispatchResult>,
    result_rx: mpsc::UnboundedReceiver<DispatchResult>,
}

impl WebTermApp {
    /// Create the app talking to the configured executor
    pub fn new(config: &Config) -> Result<Self> {
        let dispatcher = Arc::new(HttpDispatcher::from_config(&config.client));
        info!("Dispatching commands to {}", dispatcher.url());
        Self::with_dispatcher(dispatcher, &config.ui)
    }

    /// Create the app around any dispatcher
    pub fn with_dispatcher(dispatcher: Arc<dyn CommandDispatcher>, ui: &UiConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("webterm-dispatch")
            .enable_all()
            .build()?;

        let (result_tx, result_rx) = mpsc::unbounded_channel();
        let colors = TerminalColors::default();

        Ok(Self {
            controller: InputController::from_config(dispatcher, ui),
            input_field: InputField::new(ui.font_size, colors.prompt),
            viewport: TerminalViewport::new(colors, ui.font_size),
            runtime,
            result_tx,
            result_rx,
        })
    }

    /// The interaction engine
    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    /// Apply any finished dispatch to the controller
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            if let Err(e) = self.controller.settle(result) {
                warn!("Dropping dispatch result: {}", e);
            }
            self.input_field.request_caret_to_end();
        }
    }

    /// Run `command` on the runtime and wake the UI when it finishes
    fn dispatch(&self, command: Command, ctx: &egui::Context) {
        let dispatcher = self.controller.dispatcher();
        let tx = self.result_tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let result = dispatcher.dispatch(command.as_str()).await;
            if tx.send(result).is_err() {
                debug!("UI closed before '{}' finished", command);
            }
            ctx.request_repaint();
        });
    }

    fn apply_key(&mut self, key: Key, ctx: &egui::Context) {
        match self.controller.handle_key(key) {
            KeyOutcome::Submit(command) => self.dispatch(command, ctx),
            KeyOutcome::Recalled
            | KeyOutcome::Completed
            | KeyOutcome::CandidatesShown
            | KeyOutcome::PromptCycled => self.input_field.request_caret_to_end(),
            KeyOutcome::Edited | KeyOutcome::Unchanged | KeyOutcome::Ignored => {}
        }
    }

    fn render_terminal(&mut self, ui: &mut egui::Ui) {
        let scroll_to_end = self.controller.renderer_mut().take_scroll_request();

        let keys = if self.controller.is_awaiting_input() {
            ControlKeys::capture(ui)
        } else {
            ControlKeys::default()
        };

        let mut edited = None;
        let controller = &self.controller;
        let input_field = &mut self.input_field;
        self.viewport.render(
            ui,
            controller.renderer().lines(),
            scroll_to_end,
            |ui| match controller.input_text() {
                Some(text) => edited = Some(input_field.show(ui, controller.prompt(), text)),
                None => {
                    ui.spinner();
                }
            },
        );

        if let Some(text) = edited {
            self.controller.set_input_text(&text);
        }

        let ctx = ui.ctx().clone();
        for key in keys.to_keys() {
            self.apply_key(key, &ctx);
        }
    }
}

impl eframe::App for WebTermApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        self.poll_results();

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(self.viewport.colors().background))
            .show_inside(ui, |ui| {
                self.render_terminal(ui);
            });
    }
}
