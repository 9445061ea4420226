//! Table layout selection and row state.
//!
//! Tables map onto the `tableii` .. `tablev` environments, so only two to
//! five columns can be rendered. The first row of a table is its header:
//! header cells are written as plain text, later rows are introduced by the
//! environment's `\line..` command and keep their inline markup.

use crate::model::Node;

use super::escape::{Whitespace, escape_latex};

/// Supported column layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    Two,
    Three,
    Four,
    Five,
}

impl Columns {
    /// Layout for a column count, or `None` outside 2..=5.
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Columns::Two),
            3 => Some(Columns::Three),
            4 => Some(Columns::Four),
            5 => Some(Columns::Five),
            _ => None,
        }
    }

    pub fn count(self) -> usize {
        match self {
            Columns::Two => 2,
            Columns::Three => 3,
            Columns::Four => 4,
            Columns::Five => 5,
        }
    }

    /// Roman numeral suffix shared by the environment and row command.
    fn numeral(self) -> &'static str {
        match self {
            Columns::Two => "ii",
            Columns::Three => "iii",
            Columns::Four => "iv",
            Columns::Five => "v",
        }
    }

    /// Environment name, e.g. `tableiii`.
    pub fn environment(self) -> String {
        format!("table{}", self.numeral())
    }

    /// Opening markup, e.g. `\begin{tableii}{l|l}{textrm}`.
    pub fn begin(self) -> String {
        let spec = vec!["l"; self.count()].join("|");
        format!("\\begin{{{}}}{{{}}}{{textrm}}", self.environment(), spec)
    }

    /// Closing markup, e.g. `\n\end{tableii}\n\n`.
    pub fn end(self) -> String {
        format!("\n\\end{{{}}}\n\n", self.environment())
    }

    /// Row command emitted before every body row, e.g. `\n\lineii`.
    pub fn row_command(self) -> String {
        format!("\n\\line{}", self.numeral())
    }
}

/// State of one open table group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub columns: Columns,
    first_row: bool,
}

impl TableState {
    pub fn new(columns: Columns) -> Self {
        Self {
            columns,
            first_row: true,
        }
    }

    /// Whether the row being rendered is the header row.
    pub fn in_header(&self) -> bool {
        self.first_row
    }

    /// Markup to emit when a row starts.
    pub fn row_start(&self) -> Option<String> {
        (!self.first_row).then(|| self.columns.row_command())
    }

    /// Mark the current row as finished.
    pub fn finish_row(&mut self) {
        self.first_row = false;
    }
}

/// Render a header cell from its plain text content.
pub fn header_cell(cell: &Node, whitespace: Whitespace) -> String {
    let text = cell.astext();
    format!("{{{}}}", escape_latex(text.trim_matches(' '), whitespace))
}
