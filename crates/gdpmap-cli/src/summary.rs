use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gdpmap_cli::pipeline::{ReconcileOutput, YearOutput};

pub fn print_map_summary(results: &[YearOutput]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Year"),
        header_cell("Mapped"),
        header_cell("Missing"),
        header_cell("No data"),
        header_cell("Outputs"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for result in results {
        let mapping = &result.mapping;
        table.add_row(vec![
            Cell::new(&mapping.year).add_attribute(Attribute::Bold),
            count_cell(mapping.values.len(), Color::Green),
            count_cell(mapping.missing.len(), Color::Yellow),
            count_cell(mapping.no_data.len(), Color::Yellow),
            outputs_cell(&result.outputs),
        ]);
    }
    println!("{table}");
}

pub fn print_reconcile_summary(result: &ReconcileOutput) {
    println!("Plot countries: {}", result.plot_countries);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Codes")]);
    apply_summary_table_style(&mut table);
    let matched = &result.reconciliation.matched;
    table.add_row(vec![
        Cell::new(format!("Matched ({})", matched.len())).fg(Color::Green),
        Cell::new(
            matched
                .iter()
                .map(|(plot, data)| format!("{plot}={data}"))
                .collect::<Vec<_>>()
                .join(" "),
        ),
    ]);
    table.add_row(vec![
        Cell::new(format!(
            "Not in GDP file ({})",
            result.reconciliation.unmatched.len()
        ))
        .fg(Color::Yellow),
        code_list_cell(result.reconciliation.unmatched.iter()),
    ]);
    table.add_row(vec![
        Cell::new(format!(
            "Not in code file ({})",
            result.not_in_code_file.len()
        ))
        .fg(Color::Yellow),
        code_list_cell(result.not_in_code_file.iter()),
    ]);
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn outputs_cell(outputs: &[PathBuf]) -> Cell {
    if outputs.is_empty() {
        return Cell::new("-").add_attribute(Attribute::Dim);
    }
    Cell::new(
        outputs
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn code_list_cell<'a>(codes: impl Iterator<Item = &'a String>) -> Cell {
    let codes: Vec<&str> = codes.map(String::as_str).collect();
    if codes.is_empty() {
        Cell::new("-").add_attribute(Attribute::Dim)
    } else {
        Cell::new(codes.join(" "))
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
