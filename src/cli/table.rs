/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Right,
        }
    }
}

/// Plain-text table with a header row and a rule beneath it.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Widest cell per column, headers included.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .fold(column.header.chars().count(), usize::max)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![self.render_row(&header, &widths)];
        lines.push(
            widths
                .iter()
                .map(|width| "-".repeat(width + self.padding * 2))
                .collect::<Vec<_>>()
                .join(" "),
        );
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }
        lines.join("\n")
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment, self.padding)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }
}

fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let gap = width.saturating_sub(text.chars().count());
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{text}{}{pad}", " ".repeat(gap)),
        Alignment::Right => format!("{pad}{}{text}{pad}", " ".repeat(gap)),
    }
}
