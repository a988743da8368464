
use std::fmt;

use color_print::cformat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTag {
    Plain,
    Good,
    Bad,
    Pending,
    Critical,
}

/// Text rendition of the panel's tree views.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<(Vec<String>, RowTag)>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: vec![],
        }
    }

    pub fn row(mut self, cells: Vec<String>, tag: RowTag) -> Self {
        self.rows.push((cells, tag));
        self
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for (cells, _) in &self.rows {
            for (i, cell) in cells.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }
        widths
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        writeln!(f, "{}", cformat!("<bold>{}</bold>", line(self.headers.iter().copied(), &widths)))?;
        writeln!(f, "{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"))?;
        if self.rows.is_empty() {
            return writeln!(f, "(sin registros)");
        }
        for (cells, tag) in &self.rows {
            let text = line(cells.iter().map(String::as_str), &widths);
            let text = match tag {
                RowTag::Plain => text,
                RowTag::Good => cformat!("<green>{}</green>", text),
                RowTag::Bad => cformat!("<red>{}</red>", text),
                RowTag::Pending => cformat!("<yellow>{}</yellow>", text),
                RowTag::Critical => cformat!("<red><bold>{}</bold></red>", text),
            };
            writeln!(f, "{text}")?;
        }
        Ok(())
    }
}

/// `22000` -> `22,000`
pub fn thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `85450` -> `$85,450.00`
pub fn money(amount: i64) -> String {
    format!("${}.00", thousands(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(22_000), "22,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands(-11_500), "-11,500");
        assert_eq!(money(45_000), "$45,000.00");
    }

    #[test]
    fn pads_columns_by_chars() {
        let table = Table::new(&["ID", "Nombre"])
            .row(vec!["101".to_string(), "Sofía".to_string()], RowTag::Plain)
            .row(vec!["1".to_string(), "Al".to_string()], RowTag::Plain);
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "101 | Sofía");
        assert_eq!(lines[3], "1   | Al");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_table_says_so() {
        assert!(Table::new(&["ID"]).to_string().contains("(sin registros)"));
    }
}
