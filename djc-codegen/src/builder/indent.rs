//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (the `dart format` style).
    pub const DART: Self = Self::Spaces(2);

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(*n as usize),
            Self::Tab => "\t".to_string(),
        }
    }

    /// The string for `depth` indent levels.
    pub fn at(&self, depth: usize) -> String {
        self.unit().repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DART
    }
}
