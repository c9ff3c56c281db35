//! Input row
//!
//! Draws the prompt marker and the editable line. Keys that belong to the
//! controller (Enter, Tab, Up, Down) are taken out of the frame's input
//! before the text field can act on them.

use eframe::egui;

use crate::terminal::Key;

/// Controller keys pressed during one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlKeys {
    pub enter: bool,
    pub tab: bool,
    pub up: bool,
    pub down: bool,
}

impl ControlKeys {
    /// Consume the controller keys from this frame's input
    pub fn capture(ui: &egui::Ui) -> Self {
        ui.input_mut(|i| Self {
            enter: i.consume_key(egui::Modifiers::NONE, egui::Key::Enter),
            tab: i.consume_key(egui::Modifiers::NONE, egui::Key::Tab),
            up: i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp),
            down: i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown),
        })
    }

    /// Keys in the order they are applied: recall, completion, submit
    pub fn to_keys(self) -> Vec<Key> {
        let mut keys = Vec::new();
        if self.up {
            keys.push(Key::ArrowUp);
        }
        if self.down {
            keys.push(Key::ArrowDown);
        }
        if self.tab {
            keys.push(Key::Tab);
        }
        if self.enter {
            keys.push(Key::Enter);
        }
        keys
    }

    /// Whether no controller key was pressed
    pub fn is_empty(&self) -> bool {
        !(self.enter || self.tab || self.up || self.down)
    }
}

/// The prompt marker plus a single-line text field
pub struct InputField {
    font_size: f32,
    prompt_color: egui::Color32,
    caret_to_end: bool,
}

impl InputField {
    pub fn new(font_size: f32, prompt_color: egui::Color32) -> Self {
        Self {
            font_size,
            prompt_color,
            caret_to_end: false,
        }
    }

    /// Move the caret to the end of the text on the next draw
    pub fn request_caret_to_end(&mut self) {
        self.caret_to_end = true;
    }

    /// Draw the row and return the text as edited this frame
    pub fn show(&mut self, ui: &mut egui::Ui, prompt: &str, text: &str) -> String {
        let mut buffer = text.to_string();
        let font = egui::FontId::monospace(self.font_size);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(
                egui::RichText::new(prompt)
                    .font(font.clone())
                    .color(self.prompt_color),
            );

            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .font(font)
                    .frame(egui::Frame::NONE)
                    .desired_width(f32::INFINITY)
                    .lock_focus(true),
            );
            response.request_focus();

            if self.caret_to_end {
                if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), response.id) {
                    let ccursor = egui::text::CCursor::new(buffer.chars().count());
                    state.cursor.set_char_range(Some(egui::text::CCursorRange::one(ccursor)));
                    state.store(ui.ctx(), response.id);
                }
                self.caret_to_end = false;
            }
        });

        buffer
    }
}
