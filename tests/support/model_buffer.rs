use editbuf::error::BufferResult;
use editbuf::traits::EditOps;

// Reference model: the same editing contract over a plain Vec<char> plus an
// offset. Used to cross-check the linked-cell Buffer in property tests.
#[derive(Default, Debug, Clone)]
pub struct ModelBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl ModelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }
}

impl EditOps for ModelBuffer {
    fn insert(&mut self, value: char) -> BufferResult<()> {
        self.chars.insert(self.cursor, value);
        self.cursor += 1;
        Ok(())
    }

    fn delete_forward(&mut self) -> BufferResult<Option<char>> {
        if self.cursor < self.chars.len() {
            Ok(Some(self.chars.remove(self.cursor)))
        } else {
            Ok(None)
        }
    }

    fn move_forward(&mut self) -> BufferResult<bool> {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn move_backward(&mut self) -> BufferResult<bool> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn move_to_start(&mut self) -> BufferResult<()> {
        self.cursor = 0;
        Ok(())
    }

    fn move_to_end(&mut self) -> BufferResult<()> {
        self.cursor = self.chars.len();
        Ok(())
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn cursor_offset(&self) -> usize {
        self.cursor
    }
}
