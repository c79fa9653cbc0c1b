use egui::{Align, Layout, RichText, Vec2b};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, PlotPoints};

use beekeeper::{
    Timeframe,
    format::{capitalize, celsius, forecast_day_label},
    model::{CurrentWeather, WeatherData, WeatherForecast},
    report::{CURRENT_CONDITIONS_HEADING, WEATHER_HEADING},
};

use super::DashboardApp;
use crate::ui::{PALETTE_AMBER, PALETTE_MUTED, card_frame, icon, tone_color};
use beekeeper::styles::Tone;

const FORECAST_ROW_HEIGHT: f32 = 22.;
const FORECAST_PLOT_HEIGHT: f32 = 140.;

impl DashboardApp {
    pub(crate) fn weather_view(&mut self, ui: &mut egui::Ui, weather: &WeatherData) {
        card_frame(None).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                icon(ui, weather.current.condition.style(), 16.);
                ui.label(RichText::new(WEATHER_HEADING).strong().size(16.));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let previous = self.app_config.selected_timeframe;
                    // right-to-left, so the last added is the leftmost
                    ui.selectable_value(
                        &mut self.app_config.selected_timeframe,
                        Timeframe::FiveDay,
                        "5 Days",
                    );
                    ui.selectable_value(
                        &mut self.app_config.selected_timeframe,
                        Timeframe::Today,
                        "Today",
                    );
                    if previous != self.app_config.selected_timeframe {
                        self.save_config();
                    }
                });
            });
            ui.add_space(8.);

            current_conditions(ui, &weather.current);
            ui.add_space(10.);

            match self.app_config.selected_timeframe {
                Timeframe::Today => match weather.today() {
                    Some(today) => todays_details(ui, today),
                    None => no_forecast(ui),
                },
                Timeframe::FiveDay => {
                    if weather.forecast.is_empty() {
                        no_forecast(ui);
                    } else {
                        forecast_table(ui, &weather.forecast);
                        ui.add_space(8.);
                        forecast_plot(ui, &weather.forecast);
                    }
                }
            }
        });
    }
}

fn current_conditions(ui: &mut egui::Ui, current: &CurrentWeather) {
    let style = current.condition.style();
    ui.label(RichText::new(CURRENT_CONDITIONS_HEADING).strong().color(PALETTE_MUTED));
    ui.horizontal(|ui| {
        icon(ui, style, 36.);
        ui.vertical(|ui| {
            ui.label(RichText::new(celsius(current.temperature)).size(28.).strong());
            ui.label(RichText::new(capitalize(style.label)).color(PALETTE_MUTED));
        });
    });
    ui.add_space(6.);
    ui.columns(2, |columns| {
        columns[0].label(format!("💧 Humidity {:.0}%", current.humidity));
        columns[0].label(format!("🌬 Wind {:.0} km/h {}", current.wind_speed, current.wind_direction));
        columns[1].label(format!("☀ UV Index {:.0}", current.uv_index));
        columns[1].label(format!("🌡 Pressure {:.0} hPa", current.pressure));
    });
}

fn todays_details(ui: &mut egui::Ui, today: &WeatherForecast) {
    ui.label(RichText::new("Today's Details").strong());
    egui::Grid::new("todays_details").num_columns(2).show(ui, |ui| {
        ui.label("High");
        ui.label(celsius(today.high));
        ui.end_row();
        ui.label("Low");
        ui.label(celsius(today.low));
        ui.end_row();
        ui.label("Rain chance");
        ui.label(format!("{:.0}%", today.precipitation));
        ui.end_row();
        ui.label("Wind");
        ui.label(format!("{:.0} km/h", today.wind_speed));
        ui.end_row();
    });
}

fn no_forecast(ui: &mut egui::Ui) {
    ui.label(RichText::new("No forecast available").italics().color(PALETTE_MUTED));
}

fn forecast_table(ui: &mut egui::Ui, forecast: &[WeatherForecast]) {
    TableBuilder::new(ui)
        .id_salt("forecast_table")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(48.))
        .column(Column::remainder())
        .columns(Column::auto().at_least(56.), 3)
        .header(FORECAST_ROW_HEIGHT, |mut header| {
            for title in ["Day", "Conditions", "Rain", "Wind", "High / Low"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (index, day) in forecast.iter().enumerate() {
                let style = day.condition.style();
                body.row(FORECAST_ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(forecast_day_label(index, day.date));
                    });
                    row.col(|ui| {
                        icon(ui, style, 14.);
                        ui.label(capitalize(style.label));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}%", day.precipitation));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0} km/h", day.wind_speed));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}° / {:.0}°", day.high, day.low));
                    });
                });
            }
        });
}

fn forecast_plot(ui: &mut egui::Ui, forecast: &[WeatherForecast]) {
    let mut high_vec = Vec::<[f64; 2]>::new();
    let mut low_vec = Vec::<[f64; 2]>::new();
    for (index, day) in forecast.iter().enumerate() {
        high_vec.push([index as f64, day.high as f64]);
        low_vec.push([index as f64, day.low as f64]);
    }

    egui_plot::Plot::new("forecast_plot")
        .height(FORECAST_PLOT_HEIGHT)
        .show_background(false)
        .legend(Legend::default())
        .allow_drag(Vec2b::new(false, false))
        .allow_zoom(Vec2b::new(false, false))
        .allow_scroll(Vec2b::new(false, false))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("High", PlotPoints::new(high_vec)).color(PALETTE_AMBER));
            plot_ui.line(
                Line::new("Low", PlotPoints::new(low_vec)).color(tone_color(Tone::Blue)),
            );
        });
}
