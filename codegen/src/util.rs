use core::fmt;

/// One level of indentation in generated code.
pub(crate) const INDENT: &str = "    ";

/// Indentation depth of a line of generated code.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Level(pub usize);

impl Level {
    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.0).try_for_each(|_| f.write_str(INDENT))
    }
}

/// Returns the separator to write before item `index` of a comma-separated list.
pub(crate) const fn sep(index: usize) -> &'static str {
    if index == 0 { "" } else { ", " }
}
