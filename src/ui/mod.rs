use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use beekeeper::styles::{DisplayStyle, Tone};

pub(crate) mod dashboard;

pub(crate) const PALETTE_FIELD: Color32 = Color32::from_rgb(250, 246, 234);
pub(crate) const PALETTE_CARD: Color32 = Color32::from_rgb(255, 252, 244);
pub(crate) const PALETTE_HONEY: Color32 = Color32::from_rgb(232, 163, 23);
pub(crate) const PALETTE_AMBER: Color32 = Color32::from_rgb(217, 119, 6);
pub(crate) const PALETTE_MEADOW: Color32 = Color32::from_rgb(77, 124, 15);
pub(crate) const PALETTE_DESTRUCTIVE: Color32 = Color32::from_rgb(220, 38, 38);
pub(crate) const PALETTE_MUTED: Color32 = Color32::from_rgb(120, 113, 108);
pub(crate) const PALETTE_INK: Color32 = Color32::from_rgb(41, 37, 36);

const DEFAULT_CARD_CORNER_RADIUS: u8 = 12;
const DEFAULT_BADGE_CORNER_RADIUS: u8 = 6;

/// Concrete color for a design token.
pub(crate) fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Accent => PALETTE_MEADOW,
        Tone::Amber => PALETTE_AMBER,
        Tone::Destructive => PALETTE_DESTRUCTIVE,
        Tone::Muted => PALETTE_MUTED,
        Tone::Yellow => Color32::from_rgb(234, 179, 8),
        Tone::Gray => Color32::from_rgb(156, 163, 175),
        Tone::Slate => Color32::from_rgb(107, 114, 128),
        Tone::LightGray => Color32::from_rgb(209, 213, 219),
        Tone::Blue => Color32::from_rgb(59, 130, 246),
        Tone::DeepBlue => Color32::from_rgb(29, 78, 216),
        Tone::Green => Color32::from_rgb(34, 197, 94),
    }
}

/// Translucent background derived from a tone, used behind cards and badges.
pub(crate) fn tone_fill(tone: Tone, alpha: u8) -> Color32 {
    let color = tone_color(tone);
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Rounded card frame with an optional tone-colored border.
pub(crate) fn card_frame(tone: Option<Tone>) -> Frame {
    let (fill, stroke) = match tone {
        Some(tone) => (tone_fill(tone, 20), Stroke::new(2.0, tone_fill(tone, 140))),
        None => (PALETTE_CARD, Stroke::new(1.0, Color32::from_gray(220))),
    };
    Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(DEFAULT_CARD_CORNER_RADIUS))
        .inner_margin(Margin::same(16))
}

/// Small pill with the style's label, e.g. a hive status or a priority.
pub(crate) fn badge(ui: &mut Ui, text: impl Into<String>, tone: Tone) {
    Frame::new()
        .fill(tone_fill(tone, 45))
        .corner_radius(CornerRadius::same(DEFAULT_BADGE_CORNER_RADIUS))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text.into()).size(11.0).strong().color(tone_color(tone)));
        });
}

/// The style's icon glyph, colored by its tone.
pub(crate) fn icon(ui: &mut Ui, style: DisplayStyle, size: f32) {
    ui.label(
        RichText::new(style.icon.glyph())
            .size(size)
            .color(tone_color(style.tone)),
    );
}
