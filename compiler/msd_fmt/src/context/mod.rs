//! Formatting Context
//!
//! Wraps an emitter and tracks the output column, which is what the
//! multi-line layouts align on.

use crate::emitter::{Emitter, StringEmitter};

/// Default offset of `_then`/`_else` and of a broken `_fun` body.
pub const INDENT_WIDTH: usize = 2;

/// Configuration for the pretty-printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Columns `_then`, `_else` and a broken function body sit to the right
    /// of the keyword that opened them.
    pub indent_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
        }
    }
}

/// Formatting context that tracks state during output.
///
/// All emit operations update the column automatically. Everything emitted
/// is ASCII, so bytes and columns coincide.
pub struct FormatContext<E: Emitter = StringEmitter> {
    emitter: E,
    column: usize,
    config: FormatConfig,
}

impl FormatContext<StringEmitter> {
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    pub fn with_config(config: FormatConfig) -> Self {
        Self::with_emitter_and_config(StringEmitter::new(), config)
    }

    /// Get the formatted output.
    pub fn finalize(self) -> String {
        self.emitter.output()
    }
}

impl Default for FormatContext<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> FormatContext<E> {
    pub fn with_emitter_and_config(emitter: E, config: FormatConfig) -> Self {
        Self {
            emitter,
            column: 0,
            config,
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Current column position (0-indexed).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Emit a text fragment.
    pub fn emit(&mut self, text: &str) {
        debug_assert!(!text.contains('\n'), "use emit_newline for line breaks");
        self.emitter.emit(text);
        self.column += text.len();
    }

    pub fn emit_space(&mut self) {
        self.emitter.emit_space();
        self.column += 1;
    }

    pub fn emit_newline(&mut self) {
        self.emitter.emit_newline();
        self.column = 0;
    }

    /// Start a new line and indent it to `column`.
    pub fn newline_to(&mut self, column: usize) {
        self.emit_newline();
        self.emitter.emit_indent(column);
        self.column = column;
    }

    /// Get a reference to the underlying emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }
}
