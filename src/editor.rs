use crate::error::BufferResult;
use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::traits::EditOps;
use crate::types::EditOp;

/// Translate a key event into a buffer operation.
///
/// Plain printable characters insert themselves; the navigation keys and
/// the usual readline control chords map onto cursor motion and forward
/// deletion. Keys with no counterpart in the operation set (Backspace,
/// Enter, Esc, unrecognized chords) return `None` so the host can decide
/// what they mean.
pub fn dispatch(event: KeyEvent) -> Option<EditOp> {
    // Control chords first: C-b/C-f/C-a/C-e/C-d in the readline tradition
    if event.mods.contains(Modifiers::CTRL) {
        return match event.code {
            KeyCode::Char('b') => Some(EditOp::MoveBackward),
            KeyCode::Char('f') => Some(EditOp::MoveForward),
            KeyCode::Char('a') => Some(EditOp::MoveToStart),
            KeyCode::Char('e') => Some(EditOp::MoveToEnd),
            KeyCode::Char('d') => Some(EditOp::DeleteForward),
            _ => None,
        };
    }
    if event.mods.contains(Modifiers::ALT) {
        return None;
    }
    match event.code {
        KeyCode::Char(c) => Some(EditOp::Insert(c)),
        KeyCode::Left => Some(EditOp::MoveBackward),
        KeyCode::Right => Some(EditOp::MoveForward),
        KeyCode::Home => Some(EditOp::MoveToStart),
        KeyCode::End => Some(EditOp::MoveToEnd),
        KeyCode::Delete => Some(EditOp::DeleteForward),
        KeyCode::Backspace | KeyCode::Enter | KeyCode::Esc => None,
    }
}

/// Dispatch a key event and apply the resulting operation to `buf`.
///
/// Returns the operation that ran, or `None` for keys the dispatcher does
/// not map. Errors from the buffer (destroyed handle, allocation failure)
/// propagate unchanged.
pub fn feed<E: EditOps>(buf: &mut E, event: KeyEvent) -> BufferResult<Option<EditOp>> {
    match dispatch(event) {
        Some(op) => {
            buf.apply(op)?;
            Ok(Some(op))
        }
        None => Ok(None),
    }
}
