//! Color utilities for UI rendering
//!
//! Maps scrollback line classes to the colors the terminal draws them in.

use crate::models::LineClass;
use eframe::egui;

/// Colors used by the terminal panel
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalColors {
    pub background: egui::Color32,
    pub error: egui::Color32,
    pub directory: egui::Color32,
    pub file: egui::Color32,
    pub prompt: egui::Color32,
}

impl TerminalColors {
    /// Color for a line of the given class
    pub fn for_class(&self, class: LineClass) -> egui::Color32 {
        match class {
            LineClass::Error => self.error,
            LineClass::Directory => self.directory,
            LineClass::File => self.file,
            LineClass::Prompt => self.prompt,
        }
    }
}

impl Default for TerminalColors {
    fn default() -> Self {
        Self {
            background: egui::Color32::from_rgb(18, 18, 24),
            error: egui::Color32::from_rgb(255, 110, 110),
            directory: egui::Color32::from_rgb(110, 160, 255),
            file: egui::Color32::from_rgb(220, 220, 220),
            prompt: egui::Color32::from_rgb(100, 200, 100),
        }
    }
}
