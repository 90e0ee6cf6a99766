use std::ops::RangeInclusive;

use eframe::egui::{self, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Catalog;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – the five dashboard views
// ---------------------------------------------------------------------------

/// Render the dashboard: total count, top-10 table, pie, line chart,
/// grouped histogram, and (optionally) the raw filtered table.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(catalog) = &state.catalog else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a catalog to explore titles  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Movies & TV Shows");
            ui.label(format!("Total titles: {}", state.visible_indices.len()));
            ui.add_space(8.0);

            ui.strong("Top 10 titles by release year");
            top_titles_table(ui, catalog, &state.top_titles);
            ui.add_space(12.0);

            ui.strong("Distribution by type");
            kind_pie(ui, state);
            ui.add_space(12.0);

            ui.strong("Releases over time");
            yearly_line(ui, &state.yearly_counts);
            ui.add_space(12.0);

            ui.strong("Ratings distribution");
            rating_bars(ui, state);

            if state.show_raw {
                ui.add_space(12.0);
                ui.strong("Raw data");
                raw_table(ui, catalog, &state.visible_indices);
            }
        });
}

// ---------------------------------------------------------------------------
// Top-10 table
// ---------------------------------------------------------------------------

fn top_titles_table(ui: &mut Ui, catalog: &Catalog, top: &[usize]) {
    if top.is_empty() {
        ui.label("No matching titles.");
        return;
    }

    ui.push_id("top_titles", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Title");
                });
                header.col(|ui| {
                    ui.strong("Type");
                });
                header.col(|ui| {
                    ui.strong("Year");
                });
                header.col(|ui| {
                    ui.strong("Rating");
                });
            })
            .body(|mut body| {
                for &idx in top {
                    let t = &catalog.titles[idx];
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&t.title);
                        });
                        row.col(|ui| {
                            ui.label(&t.kind);
                        });
                        row.col(|ui| {
                            ui.label(
                                t.release_year
                                    .map(|y| y.to_string())
                                    .unwrap_or_default(),
                            );
                        });
                        row.col(|ui| {
                            ui.label(t.rating.as_deref().unwrap_or(""));
                        });
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Type distribution – pie chart
// ---------------------------------------------------------------------------

fn kind_pie(ui: &mut Ui, state: &AppState) {
    let total: usize = state.kind_counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        ui.label("No data.");
        return;
    }

    let radius = 90.0_f32;

    ui.horizontal(|ui: &mut Ui| {
        let (rect, _response) = ui
            .allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
        let center = rect.center();
        let painter = ui.painter();

        // Slices start at 12 o'clock, proceeding clockwise.
        let mut start_angle = -std::f32::consts::FRAC_PI_2;
        for (kind, count) in &state.kind_counts {
            let sweep_angle = (*count as f32 / total as f32) * 2.0 * std::f32::consts::PI;
            if sweep_angle < 0.001 {
                continue;
            }
            let color = state.kind_colors.color_for(kind);

            let mut points = vec![center];
            let n_points = ((sweep_angle / (std::f32::consts::PI / 32.0)).ceil() as usize).max(3);
            for j in 0..=n_points {
                let angle = start_angle + (j as f32 / n_points as f32) * sweep_angle;
                points.push(center + egui::vec2(angle.cos(), angle.sin()) * radius);
            }

            painter.add(egui::Shape::convex_polygon(
                points,
                color,
                egui::Stroke::new(1.0, color.gamma_multiply(0.5)),
            ));

            start_angle += sweep_angle;
        }

        // Legend with percentages next to the pie.
        ui.vertical(|ui: &mut Ui| {
            for (kind, count) in &state.kind_counts {
                let pct = *count as f32 / total as f32 * 100.0;
                let color = state.kind_colors.color_for(kind);
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, color);
                    ui.label(format!("{kind} — {pct:.1}% ({count})"));
                });
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Yearly trend – line chart
// ---------------------------------------------------------------------------

fn yearly_line(ui: &mut Ui, yearly_counts: &[(i32, usize)]) {
    let points: PlotPoints = yearly_counts
        .iter()
        .map(|&(year, count)| [f64::from(year), count as f64])
        .collect();

    Plot::new("yearly_trend")
        .x_axis_label("Release year")
        .y_axis_label("Titles")
        .height(220.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Releases").width(1.5));
        });
}

// ---------------------------------------------------------------------------
// Ratings distribution – grouped bar chart
// ---------------------------------------------------------------------------

fn rating_bars(ui: &mut Ui, state: &AppState) {
    let hist = &state.rating_histogram;
    if hist.is_empty() {
        ui.label("No data.");
        return;
    }

    // One bar group per rating; within a group one bar per type, offset
    // around the integer x position.
    let n_series = hist.series.len();
    let group_width = 0.8;
    let bar_width = group_width / n_series as f64;

    let mut charts: Vec<BarChart> = Vec::new();
    for (si, series) in hist.series.iter().enumerate() {
        let offset = (si as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
        let bars: Vec<Bar> = series
            .counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(ri, &count)| {
                Bar::new(ri as f64 + offset, count as f64).width(bar_width * 0.9)
            })
            .collect();
        charts.push(
            BarChart::new(bars)
                .name(&series.kind)
                .color(state.kind_colors.color_for(&series.kind)),
        );
    }

    let ratings = hist.ratings.clone();
    Plot::new("rating_histogram")
        .legend(Legend::default())
        .x_axis_label("Rating")
        .y_axis_label("Titles")
        .height(220.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 0.01 || idx < 0.0 {
                return String::new();
            }
            ratings
                .get(idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Raw-data table
// ---------------------------------------------------------------------------

fn raw_table(ui: &mut Ui, catalog: &Catalog, indices: &[usize]) {
    if indices.is_empty() {
        ui.label("No matching titles.");
        return;
    }

    let n_columns = 5 + catalog.extra_columns.len();

    ui.push_id("raw_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true), n_columns)
            .header(20.0, |mut header| {
                for name in ["title", "type", "country", "release_year", "rating"] {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
                for name in &catalog.extra_columns {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, indices.len(), |mut row| {
                    let t = &catalog.titles[indices[row.index()]];
                    row.col(|ui| {
                        ui.label(&t.title);
                    });
                    row.col(|ui| {
                        ui.label(&t.kind);
                    });
                    row.col(|ui| {
                        ui.label(t.country.as_deref().unwrap_or(""));
                    });
                    row.col(|ui| {
                        ui.label(t.release_year.map(|y| y.to_string()).unwrap_or_default());
                    });
                    row.col(|ui| {
                        ui.label(t.rating.as_deref().unwrap_or(""));
                    });
                    for name in &catalog.extra_columns {
                        row.col(|ui| {
                            ui.label(t.extra.get(name).map(String::as_str).unwrap_or(""));
                        });
                    }
                });
            });
    });
}
