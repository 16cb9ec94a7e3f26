use crate::buffer::Buffer;
use crate::error::BufferResult;
use crate::types::EditOp;

pub trait EditOps {
    // Cursor-relative mutations
    fn insert(&mut self, value: char) -> BufferResult<()>;
    fn delete_forward(&mut self) -> BufferResult<Option<char>>;

    // Single steps return whether the cursor actually moved
    fn move_forward(&mut self) -> BufferResult<bool>;
    fn move_backward(&mut self) -> BufferResult<bool>;

    fn move_to_start(&mut self) -> BufferResult<()>;
    fn move_to_end(&mut self) -> BufferResult<()>;

    // Observers
    fn len(&self) -> usize;
    fn cursor_offset(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Dispatch one operation; true if it changed content or cursor.
    // Refused moves and empty deletes report false, never an error.
    fn apply(&mut self, op: EditOp) -> BufferResult<bool> {
        match op {
            EditOp::Insert(c) => self.insert(c).map(|()| true),
            EditOp::DeleteForward => self.delete_forward().map(|d| d.is_some()),
            EditOp::MoveForward => self.move_forward(),
            EditOp::MoveBackward => self.move_backward(),
            EditOp::MoveToStart => {
                let moved = self.cursor_offset() != 0;
                self.move_to_start()?;
                Ok(moved)
            }
            EditOp::MoveToEnd => {
                let moved = self.cursor_offset() != self.len();
                self.move_to_end()?;
                Ok(moved)
            }
        }
    }
}

impl EditOps for Buffer {
    fn insert(&mut self, value: char) -> BufferResult<()> {
        Buffer::insert(self, value)
    }

    fn delete_forward(&mut self) -> BufferResult<Option<char>> {
        Buffer::delete_forward(self)
    }

    fn move_forward(&mut self) -> BufferResult<bool> {
        Buffer::move_forward(self)
    }

    fn move_backward(&mut self) -> BufferResult<bool> {
        Buffer::move_backward(self)
    }

    fn move_to_start(&mut self) -> BufferResult<()> {
        Buffer::move_to_start(self)
    }

    fn move_to_end(&mut self) -> BufferResult<()> {
        Buffer::move_to_end(self)
    }

    fn len(&self) -> usize {
        Buffer::len(self)
    }

    fn cursor_offset(&self) -> usize {
        Buffer::cursor_offset(self)
    }
}
