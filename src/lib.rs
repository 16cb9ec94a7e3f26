pub mod buffer;
pub mod editor;
pub mod error;
pub mod key;
pub mod traits;
pub mod types;

pub use crate::buffer::{Buffer, Chars};
pub use crate::editor::{dispatch, feed};
pub use crate::error::{BufferError, BufferResult};
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::traits::EditOps;
pub use crate::types::{EditOp, Rendering};
