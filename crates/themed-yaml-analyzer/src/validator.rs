//! Structural checks on theme keys and platform scoping.

use themed_yaml_core::path::ItemPath;

use crate::{
    context::AnalysisContext,
    document::{Item, PLATFORMS_KEY},
    error::{Diagnostic, ErrorCode},
    locator::{Cursor, LocateError},
    span::Span,
};

/// Check a node's own `.platforms` against the root list and the set it
/// inherits from its parent.
///
/// Diagnostics are anchored at each platform name. The `.platforms` key is
/// searched from `cursor`; the returned cursor is past the list.
pub(crate) fn verify_platforms<'src>(
    ctx: &mut AnalysisContext<'_>,
    platforms: &[String],
    inherited: &[String],
    path: &ItemPath,
    cursor: Cursor<'src>,
) -> Result<Cursor<'src>, LocateError> {
    if platforms.is_empty() {
        return Ok(cursor);
    }

    let key = cursor.key(PLATFORMS_KEY)?;
    let mut cursor = cursor.advance_to(key.end());
    for platform in platforms {
        let span = cursor.literal(platform).unwrap_or(key);
        cursor = cursor.advance_to(span.end());

        if !ctx.platforms.contains(platform) {
            ctx.emit(
                Diagnostic::error(format!(
                    "Unknown platform: '{platform}'. All the platforms must be defined in the '.platforms' array."
                ))
                .with_code(ErrorCode::E200)
                .with_label(span, "not declared at the root"),
            );
        } else if !inherited.contains(platform) {
            ctx.emit(
                Diagnostic::error(format!(
                    "The platform '{platform}' is not accessible in '{path}'. A parent collection must have filtered it out. Verify '{platform}' was included in all the parent collections '.platforms' list."
                ))
                .with_code(ErrorCode::E201)
                .with_label(span, "filtered out by a parent"),
            );
        }
    }
    Ok(cursor)
}

/// A themed item must define the default theme.
pub(crate) fn verify_default_theme(ctx: &mut AnalysisContext<'_>, item: &Item<'_>, key_span: Span) {
    let Some(default) = ctx.themes.default_theme() else {
        return;
    };
    if item.entry(default).is_none() {
        let diagnostic = Diagnostic::error(format!("The default theme '{default}' must be defined."))
            .with_code(ErrorCode::E100)
            .with_label(key_span, format!("missing `{default}`"))
            .with_help("Every themed item falls back to the first theme in `.themes`.");
        ctx.emit(diagnostic);
    }
}

/// Every theme key of a themed item must be declared in `.themes`.
pub(crate) fn verify_theme_keys(
    ctx: &mut AnalysisContext<'_>,
    item: &Item<'_>,
    body: Cursor<'_>,
) -> Result<(), LocateError> {
    for key in item.theme_keys() {
        if ctx.themes.contains(&key) {
            continue;
        }
        let span = body.key(&key)?;
        ctx.emit(
            Diagnostic::error(format!(
                "Unknown theme: '{key}'. All the themes must be defined in the '.themes' array."
            ))
            .with_code(ErrorCode::E101)
            .with_label(span, "unknown theme"),
        );
    }
    Ok(())
}
