//! Source coordinates

/// Start/end offsets of an IR element in its source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceRange {
    pub start: i32,
    pub end: i32,
}

impl SourceRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The range used for synthesized elements (annotations, builtins)
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn len(&self) -> i32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl std::fmt::Display for SourceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
