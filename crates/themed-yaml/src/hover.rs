//! Hover text for themed color items.

use themed_yaml_analyzer::Hover;

/// Render a hover record as a markdown table of theme colors.
///
/// Colors are written as `#RRGGBBAA`; themes that did not resolve are
/// marked as such.
///
/// # Examples
///
/// ```
/// use themed_yaml::{Hover, Span, ThemedColor, color::Color, hover::to_markdown};
///
/// let hover = Hover {
///     span: Span::new(0..4),
///     path: "text".to_string(),
///     colors: vec![ThemedColor { theme: "light".to_string(), color: Some(Color::BLACK) }],
/// };
/// assert!(to_markdown(&hover).contains("| light | `#000000ff` |"));
/// ```
pub fn to_markdown(hover: &Hover) -> String {
    let mut markdown = format!("**{}**\n\n| theme | color |\n|---|---|\n", hover.path);
    for themed in &hover.colors {
        let color = themed
            .color
            .map_or_else(|| "_unresolved_".to_string(), |color| format!("`{}`", color.to_css()));
        markdown.push_str(&format!("| {} | {} |\n", themed.theme, color));
    }
    markdown
}
