use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one combo box per categorical axis plus
/// the raw-data toggle.  Each combo gets an "All" option prepended to the
/// catalog's distinct values.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(catalog) = &state.catalog else {
        ui.label("No catalog loaded.");
        return;
    };

    // Clone the choice lists so we can mutate state inside the combos.
    let kinds = catalog.kinds.clone();
    let countries = catalog.countries.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Type");
            let mut kind_change: Option<Option<String>> = None;
            let current_kind = state.selection.kind.clone();
            egui::ComboBox::from_id_salt("kind_filter")
                .selected_text(current_kind.as_deref().unwrap_or("All"))
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(current_kind.is_none(), "All")
                        .clicked()
                    {
                        kind_change = Some(None);
                    }
                    for kind in &kinds {
                        if ui
                            .selectable_label(current_kind.as_deref() == Some(kind), kind)
                            .clicked()
                        {
                            kind_change = Some(Some(kind.clone()));
                        }
                    }
                });
            if let Some(kind) = kind_change {
                state.set_kind_filter(kind);
            }
            ui.separator();

            ui.strong("Country");
            let mut country_change: Option<Option<String>> = None;
            let current_country = state.selection.country.clone();
            egui::ComboBox::from_id_salt("country_filter")
                .selected_text(current_country.as_deref().unwrap_or("All"))
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(current_country.is_none(), "All")
                        .clicked()
                    {
                        country_change = Some(None);
                    }
                    for country in &countries {
                        if ui
                            .selectable_label(current_country.as_deref() == Some(country), country)
                            .clicked()
                        {
                            country_change = Some(Some(country.clone()));
                        }
                    }
                });
            if let Some(country) = country_change {
                state.set_country_filter(country);
            }
            ui.separator();

            ui.checkbox(&mut state.show_raw, "Show raw data");
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} titles loaded, {} matching",
                catalog.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open catalog")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} titles with types {:?}",
                    catalog.len(),
                    catalog.kinds
                );
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
