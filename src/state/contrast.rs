/// WCAG color-contrast audit (developer tool)
///
/// Computes relative luminance and contrast ratios over the theme palette
/// so accent/background pairings can be checked against the AA threshold
/// without leaving the app. Pure math — the overlay in `ui::contrast` just
/// renders the report.
///
/// Luminance follows the sRGB linearization from WCAG 2.x:
/// channels at or below 0.03928 divide by 12.92, the rest go through the
/// 2.4 power curve.

use iced::theme::Palette;
use iced::Color;

/// Minimum contrast ratio for WCAG AA normal text.
pub const AA_THRESHOLD: f32 = 4.5;

/// One audited foreground/background pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastCheck {
    pub name: &'static str,
    pub ratio: f32,
    pub passes_aa: bool,
}

fn linearize(channel: f32) -> f32 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a color (alpha ignored).
pub fn relative_luminance(color: Color) -> f32 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors, rounded to two decimals. Order does
/// not matter; the result is always >= 1.
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    let ratio = (lighter + 0.05) / (darker + 0.05);
    (ratio * 100.0).round() / 100.0
}

fn check(name: &'static str, foreground: Color, background: Color) -> ContrastCheck {
    let ratio = contrast_ratio(foreground, background);
    ContrastCheck {
        name,
        ratio,
        passes_aa: ratio >= AA_THRESHOLD,
    }
}

/// Audit the pairings the UI actually renders: body text on the backdrop
/// and the backdrop-colored text sitting on each accent.
pub fn audit_palette(palette: &Palette) -> Vec<ContrastCheck> {
    vec![
        check("Body text", palette.text, palette.background),
        check("Primary action", palette.background, palette.primary),
        check("Success badge", palette.background, palette.success),
        check("Danger badge", palette.background, palette.danger),
    ]
}
