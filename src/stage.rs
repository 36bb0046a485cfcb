//! Pipeline stage tracking.
//!
//! A line such as `p1,2|s1>3|p2` runs three stages. The tracker hands out
//! one [`StageRole`] per stage, which decides where that stage reads its
//! input from and where its output goes. A tracker lives for exactly one
//! line.

/// Position of a stage within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageRole {
    /// The line has no `|`; this is its only stage.
    NotPiped,
    FirstOfPipe,
    MiddleOfPipe,
    LastOfPipe,
}

/// Where a stage reads its input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The session's main table.
    Table,
    /// The previous stage's output.
    Intermediate,
}

/// Where a stage's output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Held for the next stage.
    Intermediate,
    /// Rendered through the printer.
    Emit,
}

impl StageRole {
    pub fn source(self) -> Source {
        match self {
            StageRole::NotPiped | StageRole::FirstOfPipe => Source::Table,
            StageRole::MiddleOfPipe | StageRole::LastOfPipe => Source::Intermediate,
        }
    }

    pub fn sink(self) -> Sink {
        match self {
            StageRole::NotPiped | StageRole::LastOfPipe => Sink::Emit,
            StageRole::FirstOfPipe | StageRole::MiddleOfPipe => Sink::Intermediate,
        }
    }
}

/// Hands out stage roles for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTracker {
    pipe_count: usize,
    processed: usize,
}

impl StageTracker {
    /// A tracker for a line containing `pipe_count` separators.
    pub fn new(pipe_count: usize) -> Self {
        Self {
            pipe_count,
            processed: 0,
        }
    }

    /// Number of stages the line holds.
    pub fn stage_count(&self) -> usize {
        self.pipe_count + 1
    }

    pub fn is_exhausted(&self) -> bool {
        self.processed >= self.stage_count()
    }

    /// Role of the next stage, or `None` once every stage has been handed
    /// out.
    pub fn advance(&mut self) -> Option<StageRole> {
        if self.is_exhausted() {
            return None;
        }
        let role = if self.pipe_count == 0 {
            StageRole::NotPiped
        } else if self.processed == 0 {
            StageRole::FirstOfPipe
        } else if self.processed < self.pipe_count {
            StageRole::MiddleOfPipe
        } else {
            StageRole::LastOfPipe
        };
        self.processed += 1;
        Some(role)
    }
}

impl Iterator for StageTracker {
    type Item = StageRole;

    fn next(&mut self) -> Option<StageRole> {
        self.advance()
    }
}
