use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use tessel_ir::Span;

fn sample() -> Diagnostic {
    Diagnostic::error(ErrorCode::E9104)
        .with_message("no declaration statement for element `R` of array type")
        .with_label(Span::new(12, 30), "in this declaration")
        .with_note("element symbols must be anchored to a statement")
}

#[test]
fn test_render_plain() {
    assert_eq!(
        render(&sample()),
        "error[E9104]: no declaration statement for element `R` of array type\n\
         \x20 --> 12..30: in this declaration\n\
         \x20 = note: element symbols must be anchored to a statement\n"
    );
}

#[test]
fn test_emit_appends_to_writer() {
    let mut emitter = TerminalEmitter::new(b"log:\n".to_vec());
    assert!(emitter.emit(&sample()).is_ok());
    assert!(emitter.emit(&sample()).is_ok());
    let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert!(text.starts_with("log:\nerror[E9104]"));
    assert_eq!(text.matches("error[E9104]").count(), 2);
}
