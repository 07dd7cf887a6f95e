use themed_yaml::{
    DocumentAnalyzer, ErrorCode, Position,
    color::Color,
    workspace::{
        DecorationSink, DecorationUpdate, DiagnosticSink, DocumentId, PublishedDiagnostic,
        Workspace,
    },
};

#[derive(Debug, Default)]
struct RecordingDiagnostics {
    calls: Vec<(DocumentId, Vec<PublishedDiagnostic>)>,
}

impl DiagnosticSink for RecordingDiagnostics {
    fn replace_all(&mut self, document: &DocumentId, diagnostics: Vec<PublishedDiagnostic>) {
        self.calls.push((document.clone(), diagnostics));
    }
}

#[derive(Debug, Default)]
struct RecordingDecorations {
    calls: Vec<(DocumentId, DecorationUpdate)>,
}

impl DecorationSink for RecordingDecorations {
    fn apply(&mut self, document: &DocumentId, update: &DecorationUpdate) {
        self.calls.push((document.clone(), update.clone()));
    }
}

type TestWorkspace = Workspace<RecordingDiagnostics, RecordingDecorations>;

fn workspace() -> TestWorkspace {
    Workspace::new(
        DocumentAnalyzer::default(),
        RecordingDiagnostics::default(),
        RecordingDecorations::default(),
    )
}

const WHITE_DOC: &str = "\
.themes: [light, dark]
.themed:
  color:
    .type: color
    light: ffffffff
    dark: ffffffff
";

const BLACK_DOC: &str = "\
.themes: [light, dark]
.themed:
  color:
    .type: color
    light: ff000000
    dark: ff000000
";

#[test]
fn test_update_clears_then_publishes() {
    let mut workspace = workspace();
    let id = DocumentId::new("tokens.yaml");
    let source = ".themes: [light]\n.themed:\n  accent:\n    .type: color\n    dark: ff000000\n";

    workspace.update(id.clone(), source).expect("analysis");

    let calls = &workspace.diagnostic_sink().calls;
    assert_eq!(calls.len(), 2);
    assert!(calls[0].1.is_empty());
    let published = &calls[1].1;
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].code, Some(ErrorCode::E100));
    assert_eq!(published[0].range.start, Position::new(2, 2));
    assert_eq!(published[0].range.end, Position::new(2, 8));
    assert_eq!(published[1].code, Some(ErrorCode::E101));
}

#[test]
fn test_fatal_error_leaves_empty_set() {
    let mut workspace = workspace();
    let id = DocumentId::new("broken.yaml");

    workspace.update(id.clone(), WHITE_DOC).expect("analysis");
    let result = workspace.update(id.clone(), ".themes: [light\n");

    assert!(result.is_err());
    let calls = &workspace.diagnostic_sink().calls;
    assert!(calls.last().is_some_and(|(_, diagnostics)| diagnostics.is_empty()));
    assert!(workspace.analysis(&id).is_none());

    let (_, update) = workspace
        .decoration_sink()
        .calls
        .last()
        .expect("decorations cleared");
    assert_eq!(update.single.get(&Color::WHITE), Some(&Vec::new()));
    assert!(update.multi.values().all(Vec::is_empty));
}

#[test]
fn test_vanished_colors_are_cleared() {
    let mut workspace = workspace();
    let id = DocumentId::new("tokens.yaml");

    workspace.update(id.clone(), WHITE_DOC).expect("analysis");
    workspace.update(id.clone(), BLACK_DOC).expect("analysis");

    let calls = &workspace.decoration_sink().calls;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1.single[&Color::WHITE].len(), 2);

    let update = &calls[1].1;
    assert_eq!(update.single[&Color::WHITE], Vec::new());
    assert_eq!(update.single[&Color::BLACK].len(), 2);
    assert_eq!(update.multi["ffffffff,ffffffff"], Vec::new());
    assert_eq!(update.multi["ff000000,ff000000"].len(), 1);
}

#[test]
fn test_hover_on_item_key() {
    let mut workspace = workspace();
    let id = DocumentId::new("tokens.yaml");
    workspace.update(id.clone(), BLACK_DOC).expect("analysis");

    let hover = workspace
        .hover_at(&id, Position::new(2, 3))
        .expect("hover on the item key");
    assert_eq!(hover.path, "color");
    assert_eq!(hover.colors.len(), 2);
    assert!(workspace.hover_at(&id, Position::new(4, 6)).is_none());
    assert!(
        workspace
            .hover_at(&DocumentId::new("other.yaml"), Position::new(2, 3))
            .is_none()
    );
}

#[test]
fn test_close_clears_document() {
    let mut workspace = workspace();
    let id = DocumentId::new("tokens.yaml");
    workspace.update(id.clone(), WHITE_DOC).expect("analysis");

    workspace.close(&id);

    assert!(workspace.analysis(&id).is_none());
    let (closed, diagnostics) = workspace
        .diagnostic_sink()
        .calls
        .last()
        .expect("diagnostics cleared");
    assert_eq!(closed, &id);
    assert!(diagnostics.is_empty());
    let (_, update) = workspace
        .decoration_sink()
        .calls
        .last()
        .expect("decorations cleared");
    assert!(update.single.values().all(Vec::is_empty));
}

#[test]
fn test_documents_are_independent() {
    let mut workspace = workspace();
    let first = DocumentId::from("first.yaml");
    let second = DocumentId::from("second.yaml");

    workspace.update(first.clone(), WHITE_DOC).expect("analysis");
    workspace.update(second.clone(), BLACK_DOC).expect("analysis");
    workspace.close(&first);

    assert!(workspace.analysis(&first).is_none());
    assert!(workspace.analysis(&second).is_some());
}
