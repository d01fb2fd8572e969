//! Status reporting sink.
//!
//! Progress lines ("scanned file X", "accepted N characters") are user-facing
//! output, not logs, so collection and orchestration code takes a sink instead
//! of printing. The binary injects [`StdoutSink`]; tests inject [`MemorySink`]
//! and assert on what was reported.

/// Destination for human-readable per-step status lines.
pub trait StatusSink {
    /// Emit one status line.
    fn status(&mut self, line: &str);

    /// Emit a blank separator line.
    fn blank(&mut self) {
        self.status("");
    }
}

/// Sink that prints each line to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StatusSink for StdoutSink {
    fn status(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Sink that records lines in memory, for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Recorded lines in emission order.
    pub lines: Vec<String>,
}

impl StatusSink for MemorySink {
    fn status(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
