//! Code fence detection for line-based Markdown passes.

/// An open fenced code block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeFence {
    pub char: char,         // '`' or '~'
    pub count: usize,       // Number of characters in the fence
    pub line_number: usize, // Line number where the fence opened
}

impl CodeFence {
    /// Whether a fence marker `(char, count)` closes this block.
    #[must_use]
    pub fn is_closed_by(&self, fence_char: char, fence_count: usize) -> bool {
        fence_char == self.char && fence_count >= self.count
    }
}

/// Detect code fence marker at the start of a line
/// Returns Some((char, count)) if the line starts with 3+ backticks or tildes
#[must_use]
pub fn detect_code_fence(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start();
    let fence_char = trimmed.chars().next().filter(|c| matches!(c, '`' | '~'))?;
    let count = trimmed.chars().take_while(|&c| c == fence_char).count();
    (count >= 3).then_some((fence_char, count))
}

/// Tracks whether successive lines fall inside a fenced code block.
#[derive(Debug, Default)]
pub struct FenceTracker {
    open: Option<CodeFence>,
    line_number: usize,
}

impl FenceTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line. Returns true if the line is a fence marker or lies
    /// inside a fenced block, i.e. it must be left untouched.
    pub fn observe(&mut self, line: &str) -> bool {
        let line_number = self.line_number;
        self.line_number += 1;

        if let Some((fence_char, fence_count)) = detect_code_fence(line) {
            match self.open {
                Some(fence) if fence.is_closed_by(fence_char, fence_count) => self.open = None,
                Some(_) => {}
                None => {
                    self.open = Some(CodeFence {
                        char: fence_char,
                        count: fence_count,
                        line_number,
                    });
                }
            }
            return true;
        }

        self.open.is_some()
    }

    /// The fence still open after the last observed line, if any.
    #[must_use]
    pub fn unclosed(&self) -> Option<CodeFence> {
        self.open
    }
}
