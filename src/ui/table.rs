use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::view::songs::{ExampleSongs, COLUMNS};

const ROW_HEIGHT: f32 = 20.0;

/// Table of the leading songs of the selected cluster.
pub fn example_songs(ui: &mut Ui, songs: &ExampleSongs) {
    if songs.rows.is_empty() {
        ui.label("No songs in this cluster.");
        return;
    }

    TableBuilder::new(ui)
        .id_salt("example_songs")
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            for name in COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for song in &songs.rows {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(&song.name_song);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&song.name_artists);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(song.danceability.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(song.energy.to_string());
                    });
                });
            }
        });

    ui.small(format!(
        "Showing {} of {} songs in this cluster.",
        songs.rows.len(),
        songs.cluster_size
    ));
}
