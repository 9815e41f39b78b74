use derive_more::Display;

/// Severity styling for a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Tone {
    #[display(fmt = "warning")]
    Warning,
    #[display(fmt = "error")]
    Error,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Warning => "#f59e0b",
            Tone::Error => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    pub tone: Option<Tone>,
    pub colspan: u32,
    pub muted: bool,
}

impl TableCell {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: None, colspan: 1, muted: false }
    }

    pub fn toned(text: impl Into<String>, tone: Option<Tone>) -> Self {
        Self { tone, ..Self::text(text) }
    }

    /// Centered, muted message spanning the whole table.
    pub fn placeholder(text: impl Into<String>, colspan: u32) -> Self {
        Self { colspan, muted: true, ..Self::text(text) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Cell texts joined with ` | `; used for logs and test assertions.
    pub fn summary(&self) -> String {
        self.cells.iter().map(|c| c.text.as_str()).collect::<Vec<_>>().join(" | ")
    }
}

/// Where binders write. Implemented over the live DOM in the browser and
/// in memory for tests.
///
/// Targets are CSS selectors. Writes to a target that does not exist are
/// ignored by implementations; a missing widget must not break its siblings.
pub trait DisplaySurface {
    fn set_text(&self, target: &str, text: &str);

    fn set_class(&self, target: &str, class: &str, enabled: bool);

    /// Clear the table body, then write `rows` in order.
    fn replace_rows(&self, table: &str, rows: &[TableRow]);

    /// Whether a target currently exists on the surface.
    fn has_target(&self, target: &str) -> bool;
}
