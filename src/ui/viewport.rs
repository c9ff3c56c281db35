//! Terminal viewport component
//!
//! Draws the classified scrollback followed by the input row inside one
//! scroll area pinned to the bottom.

use eframe::egui;

use super::colors::TerminalColors;
use crate::models::OutputLine;

/// Terminal viewport component
pub struct TerminalViewport {
    colors: TerminalColors,
    font_size: f32,
}

impl TerminalViewport {
    pub fn new(colors: TerminalColors, font_size: f32) -> Self {
        Self { colors, font_size }
    }

    /// Render `lines`, then `input_row` beneath them
    ///
    /// `scroll_to_end` forces the view down even if the user had scrolled
    /// away from the bottom.
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        lines: &[OutputLine],
        scroll_to_end: bool,
        input_row: impl FnOnce(&mut egui::Ui),
    ) {
        egui::Frame::default()
            .fill(self.colors.background)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = 2.0;
                        for line in lines {
                            self.render_line(ui, line);
                        }
                        input_row(ui);
                        if scroll_to_end {
                            ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                        }
                    });
            });
    }

    fn render_line(&self, ui: &mut egui::Ui, line: &OutputLine) {
        // Blank lines still need height
        let text = if line.text.is_empty() { " " } else { &line.text };
        ui.label(
            egui::RichText::new(text)
                .font(egui::FontId::monospace(self.font_size))
                .color(self.colors.for_class(line.class)),
        );
    }

    pub fn colors(&self) -> &TerminalColors {
        &self.colors
    }
}
