//! Line-oriented output for the printer.
//!
//! The printer never emits a newline in the middle of a fragment: it starts
//! a line at some indentation, writes fragments, and ends the line.

/// Sink for printed source.
pub trait Emitter {
    /// Start a line indented by `level` steps of [`INDENT_WIDTH`].
    ///
    /// [`INDENT_WIDTH`]: crate::INDENT_WIDTH
    fn start_line(&mut self, level: usize);

    /// Append text to the current line.
    fn emit(&mut self, text: &str);

    /// Terminate the current line with `\n`.
    fn end_line(&mut self);

    /// Separate what follows by one empty line. Has no effect at the very
    /// start of the output or right after another blank line.
    fn blank_line(&mut self);
}

/// Collects printed source in memory.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn start_line(&mut self, level: usize) {
        self.buffer.push_str(&" ".repeat(level * crate::INDENT_WIDTH));
    }

    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn end_line(&mut self) {
        self.buffer.push('\n');
    }

    fn blank_line(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lines_and_indentation() {
        let mut emitter = StringEmitter::new();
        emitter.start_line(0);
        emitter.emit("if x:");
        emitter.end_line();
        emitter.start_line(2);
        emitter.emit("pass");
        emitter.end_line();
        assert_eq!(emitter.output(), "if x:\n        pass\n");
    }

    #[test]
    fn test_blank_lines_are_not_doubled() {
        let mut emitter = StringEmitter::new();
        emitter.blank_line();
        emitter.start_line(0);
        emitter.emit("import os");
        emitter.end_line();
        emitter.blank_line();
        emitter.blank_line();
        emitter.start_line(0);
        emitter.emit("x = 1");
        emitter.end_line();
        assert_eq!(emitter.output(), "import os\n\nx = 1\n");
    }
}
