//! Plain-text output for resolved colors and hovers.

use themed_yaml::{Analysis, Position, ResolvedValue, color::Color, hover::to_markdown};

/// One line per color item, with every theme's color and the text color
/// that contrasts with it.
pub fn color_table(analysis: &Analysis) -> String {
    let mut table = String::new();
    for (path, resolved) in analysis.registry().iter() {
        let swatches: Vec<String> = match resolved {
            ResolvedValue::Shared { value, .. } => match value.as_ref().and_then(|v| v.as_color()) {
                Some(color) => vec![swatch(color)],
                None => continue,
            },
            ResolvedValue::Themed { values, .. } => values
                .iter()
                .filter_map(|(theme, value)| {
                    value.as_color().map(|color| format!("{theme}={}", swatch(color)))
                })
                .collect(),
        };
        if swatches.is_empty() {
            continue;
        }
        table.push_str(&format!("{path}  {}\n", swatches.join("  ")));
    }
    table
}

/// The hover text at `position`, if any.
pub fn hover(analysis: &Analysis, position: Position) -> Option<String> {
    let offset = analysis.line_index().offset(position)?;
    analysis.hover_at(offset).map(to_markdown)
}

fn swatch(color: Color) -> String {
    format!("{} (text {})", color.to_css(), color.contrast().to_css())
}
