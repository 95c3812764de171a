pub mod charts;
pub mod panels;
pub mod table;
pub mod theme;

use eframe::egui::{Color32, RichText, Ui};

use crate::color;
use crate::view::{Notice, NoticeLevel};

/// Section heading in the accent colour.
pub fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).heading().color(color::ACCENT));
    ui.add_space(4.0);
}

/// A boxed, coloured message.
pub fn notice(ui: &mut Ui, notice: &Notice) {
    let (icon, tint) = match notice.level {
        NoticeLevel::Info => ("ℹ", Color32::from_rgb(0x5D, 0xA9, 0xE9)),
        NoticeLevel::Success => ("✔", color::ACCENT),
        NoticeLevel::Warning => ("⚠", Color32::from_rgb(0xF2, 0xC1, 0x4E)),
        NoticeLevel::Error => ("✖", Color32::from_rgb(0xE5, 0x48, 0x4D)),
    };
    ui.group(|ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(format!("{icon}  {}", notice.text)).color(tint));
    });
}
