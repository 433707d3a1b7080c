//! Output Emitter
//!
//! Abstraction for output production during serialization.

/// Trait for emitting serialized output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a single character.
    fn emit_char(&mut self, c: char);

    /// Emit a single space.
    fn emit_space(&mut self) {
        self.emit_char(' ');
    }
}

/// String-based emitter for in-memory serialization.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the serialized output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_char(&mut self, c: char) {
        self.buffer.push(c);
    }
}
