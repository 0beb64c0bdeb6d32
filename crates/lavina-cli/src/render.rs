//! Terminal rendering of bulletin details

use colored::Colorize;
use lavina_core::{
    AvalancheBulletin, DangerRatingValue, ElevationBoundaryOrBand, WARN_LEVEL_COLORS,
};
use lavina_engine::{compact, AspectDisplay};

const AVALANCHE_SIZES: [&str; 6] = [
    "",
    "small",
    "medium",
    "large",
    "very large",
    "extremely large",
];

/// Render a bulletin as a detail panel.
///
/// Without `details`, only the issuing service is shown; with it, the
/// validity window, every danger rating with its elevation range, the
/// avalanche problems with their constraints, the tendency, and the
/// highlight text are included.
pub fn render_bulletin(region: &str, bulletin: &AvalancheBulletin, details: bool) -> String {
    let mut out = String::new();

    let provider = bulletin.source_name().unwrap_or("unknown provider");
    out.push_str(&format!("{}\n", provider.bold()));
    if let Some(website) = bulletin
        .source
        .as_ref()
        .and_then(|s| s.provider.as_ref())
        .and_then(|p| p.website.as_deref())
    {
        out.push_str(&format!("{website}\n"));
    }

    if !details {
        return out;
    }

    out.push_str(&format!("region: {region}\n"));
    if let Some(valid_time) = &bulletin.valid_time {
        let start = valid_time
            .start_time
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        let end = valid_time
            .end_time
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        out.push_str(&format!("valid: {start}..{end}\n"));
    }
    if let Some(highlights) = &bulletin.highlights {
        out.push_str(&format!("{}\n", highlights.italic()));
    }

    for rating in &bulletin.danger_ratings {
        let period = rating
            .valid_time_period
            .map(|p| format!(" {p}"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}{}  {}\n",
            paint_rating(rating.main_value),
            period,
            format_elevation(rating.elevation.as_ref()),
        ));
    }

    for problem in &bulletin.avalanche_problems {
        let period = problem
            .valid_time_period
            .map(|p| format!(" {p}"))
            .unwrap_or_default();
        out.push_str(&format!("{}{}\n", problem.problem_type.to_string().bold(), period));
        out.push_str(&format!(
            "  {}\n",
            format_elevation(problem.elevation.as_ref())
        ));
        if let Some(aspects) = problem.aspects.as_deref() {
            let display = compact(aspects);
            if !display.is_empty() {
                out.push_str(&format!("  aspects: {}\n", format_aspects(&display)));
            }
        }
        if let Some(stability) = problem.snowpack_stability {
            out.push_str(&format!("  snowpack stability: {stability}\n"));
        }
        if let Some(frequency) = problem.frequency {
            out.push_str(&format!("  frequency: {frequency}\n"));
        }
        if let Some(size) = problem.avalanche_size {
            let name = AVALANCHE_SIZES.get(size as usize).copied().unwrap_or("");
            out.push_str(&format!("  avalanche size: {name}\n"));
        }
    }

    for tendency in &bulletin.tendency {
        if let Some(tendency_type) = tendency.tendency_type {
            out.push_str(&format!("tendency: {tendency_type}\n"));
        }
        if let Some(comment) = &tendency.comment {
            out.push_str(&format!("  {comment}\n"));
        }
    }

    out
}

/// The abbreviated aspect arc, with the full set alongside when the two
/// differ (terminals have no hover tooltips).
pub fn format_aspects(display: &AspectDisplay) -> String {
    match display {
        AspectDisplay::Arc { .. } => format!("{display} ({})", display.title()),
        _ => display.to_string(),
    }
}

/// `lower..upper`, with `0` and `∞` standing in for open bounds.
pub fn format_elevation(elevation: Option<&ElevationBoundaryOrBand>) -> String {
    let lower = elevation
        .and_then(|e| e.lower_bound.as_deref())
        .unwrap_or("0");
    let upper = elevation
        .and_then(|e| e.upper_bound.as_deref())
        .unwrap_or("∞");
    format!("{lower}..{upper}")
}

/// The rating identifier painted in its scale color.
pub fn paint_rating(value: DangerRatingValue) -> String {
    let entry = value.scale();
    let (r, g, b) = hex_rgb(entry.color).unwrap_or((128, 128, 128));
    format!("{}", value.to_string().truecolor(r, g, b).bold())
}

/// The warn-level fill color as an RGB triple.
pub fn level_rgb(level: u8) -> (u8, u8, u8) {
    WARN_LEVEL_COLORS
        .get(level as usize)
        .and_then(|hex| hex_rgb(hex))
        .unwrap_or((128, 128, 128))
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
