//! Plain-text rendering of the table and of the aggregate charts.

use crate::model::{COLUMNS, StudentRecord};

/// Width in characters of the longest bar in a chart.
pub const BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '█';

/// Renders rows as left-aligned columns under the fixed header.
pub fn format_table(records: &[&StudentRecord]) -> String {
    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|record| {
            [
                record.class.clone(),
                record.age.to_string(),
                record.name.clone(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_line(&mut output, &COLUMNS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut output, row, &widths);
    }
    output
}

fn push_line(output: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    output.push_str(line.trim_end());
    output.push('\n');
}

/// Renders one horizontal bar per label, scaled so the largest value spans
/// [`BAR_WIDTH`] characters. Values are printed with `precision` decimals.
pub fn bar_chart<I>(title: &str, values: I, precision: usize) -> String
where
    I: IntoIterator<Item = (String, f64)>,
{
    let values: Vec<(String, f64)> = values.into_iter().collect();
    let label_width = values
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = values.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);

    let mut output = format!("{title}\n");
    for (label, value) in &values {
        let length = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat_n(BAR_CHAR, length).collect();
        output.push_str(&format!("{label:<label_width$} | {bar} {value:.precision$}\n"));
    }
    output
}
