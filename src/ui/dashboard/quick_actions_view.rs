use egui::RichText;
use log::debug;

use beekeeper::styles::{DisplayStyle, Icon, Tone};

use super::DashboardApp;
use crate::ui::{PALETTE_MUTED, card_frame, icon};

/// Shortcut buttons on the side of the dashboard. None of them are wired to
/// a workflow yet, a click is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuickAction {
    Inspect,
    AddHive,
    WeatherCheck,
    Reports,
    Settings,
    Notifications,
}

impl QuickAction {
    const PRIMARY: [QuickAction; 4] = [
        QuickAction::Inspect,
        QuickAction::AddHive,
        QuickAction::WeatherCheck,
        QuickAction::Reports,
    ];
    const SECONDARY: [QuickAction; 2] = [QuickAction::Settings, QuickAction::Notifications];

    fn id(&self) -> &'static str {
        match self {
            QuickAction::Inspect => "inspect",
            QuickAction::AddHive => "add-hive",
            QuickAction::WeatherCheck => "weather-check",
            QuickAction::Reports => "reports",
            QuickAction::Settings => "settings",
            QuickAction::Notifications => "notifications",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            QuickAction::Inspect => "Quick Inspection",
            QuickAction::AddHive => "Add Hive",
            QuickAction::WeatherCheck => "Weather Alert",
            QuickAction::Reports => "View Reports",
            QuickAction::Settings => "Settings",
            QuickAction::Notifications => "Notifications",
        }
    }

    fn description(&self) -> Option<&'static str> {
        match self {
            QuickAction::Inspect => Some("Log a hive inspection"),
            QuickAction::AddHive => Some("Register new hive"),
            QuickAction::WeatherCheck => Some("Check conditions"),
            QuickAction::Reports => Some("Activity summary"),
            QuickAction::Settings | QuickAction::Notifications => None,
        }
    }

    fn style(&self) -> DisplayStyle {
        let (icon, tone) = match self {
            QuickAction::Inspect => (Icon::Eye, Tone::Amber),
            QuickAction::AddHive => (Icon::Plus, Tone::Accent),
            QuickAction::WeatherCheck => (Icon::Cloud, Tone::Blue),
            QuickAction::Reports => (Icon::FileText, Tone::Slate),
            QuickAction::Settings => (Icon::Settings, Tone::Muted),
            QuickAction::Notifications => (Icon::Bell, Tone::Muted),
        };
        DisplayStyle {
            icon,
            tone,
            label: self.label(),
        }
    }
}

impl DashboardApp {
    pub(crate) fn quick_actions_view(&mut self, ui: &mut egui::Ui) {
        card_frame(None).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Quick Actions").strong().size(16.));
                ui.label(RichText::new(Icon::Bee.glyph()).size(14.));
            });
            ui.add_space(8.);

            for action in QuickAction::PRIMARY {
                quick_action_button(ui, action);
                ui.add_space(4.);
            }

            ui.separator();
            for action in QuickAction::SECONDARY {
                quick_action_button(ui, action);
            }
        });
    }
}

fn quick_action_button(ui: &mut egui::Ui, action: QuickAction) {
    let style = action.style();
    let response = ui
        .horizontal(|ui| {
            icon(ui, style, 16.);
            ui.vertical(|ui| {
                let button = ui.button(RichText::new(action.label()).strong());
                if let Some(description) = action.description() {
                    ui.label(RichText::new(description).size(11.).color(PALETTE_MUTED));
                }
                button
            })
            .inner
        })
        .inner;

    if response.clicked() {
        debug!("Quick action '{}' clicked", action.id());
    }
}
