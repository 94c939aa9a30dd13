//! Aligned plain-text tables.

/// Columns never shrink below this many characters.
const MIN_COLUMN: usize = 6;

const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        fit_widths(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(display_width(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let numeric = looks_numeric(&cell);
                let padded = pad(&cell, *width, numeric);
                if options.color {
                    colorize(&padded, &cell)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

/// Shrink the widest shrinkable column one character at a time until the
/// table fits or nothing can shrink further.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > display_width(headers[*index]).max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn truncate(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

/// Color a padded cell by its content.
fn colorize(padded: &str, cell: &str) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "true" | "valid" | "ok" => "32",
        "degraded" | "overwritten" | "placeholder" => "33",
        "false" | "invalid" | "missing" | "error" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_entity_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn numbers_align_right() {
        let rows = vec![vec!["7".to_string()], vec!["1200".to_string()]];
        let table = render_entity_table(&["count"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "     7");
        assert_eq!(lines[3], "  1200");
    }

    #[test]
    fn narrow_terminals_truncate_the_widest_column() {
        let rows = vec![vec![
            "sch-1".to_string(),
            "a label that is far too long to fit".to_string(),
        ]];
        let table = render_entity_table(
            &["id", "label"],
            &rows,
            TableOptions {
                max_width: Some(24),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("row");
        assert_eq!(row.chars().count(), 24);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn missing_cells_are_dashes() {
        let rows = vec![vec!["sch-1".to_string()]];
        let table = render_entity_table(&["id", "label"], &rows, PLAIN);
        assert!(table.lines().nth(2).expect("row").trim_end().ends_with('-'));
    }

    #[test]
    fn color_wraps_known_words() {
        let rows = vec![vec!["false".to_string()]];
        let table = render_entity_table(
            &["valid"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mfalse "));
    }
}
