use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gamelink_cli::pipeline::{PipelineResult, SourceStage};
use gamelink_cli::schedule::Schedule;
use gamelink_link::LinkSummary;
use gamelink_validate::ValidationReport;

use crate::types::{LinkResult, NormalizeResult};

pub fn print_normalize_summary(result: &NormalizeResult) {
    println!("Source: {}", result.source.label());
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    println!(
        "Records: {} raw, {} cleaned ({} duplicates dropped)",
        result.raw_records,
        result.records,
        result.raw_records - result.records
    );
}

pub fn print_link_result(result: &LinkResult) {
    println!("Output: {}", result.output.display());
    print_link_table(&result.summary);
}

pub fn print_pipeline_summary(result: &PipelineResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Raw"),
        header_cell("Cleaned"),
        header_cell("Cleaned file"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for stage in [&result.metacritic, &result.steam] {
        table.add_row(source_row(stage));
    }
    println!("{table}");
    println!("Output: {}", result.final_path.display());
    print_link_table(&result.link);
    print_validation_report(&result.validation);
}

pub fn print_validation_report(report: &ValidationReport) {
    if report.passed() {
        println!(
            "Validation passed: {} rows, {} matched",
            report.rows, report.matched
        );
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for issue in &report.issues {
        table.add_row(vec![
            Cell::new(issue.code())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(issue.to_string()),
        ]);
    }
    eprintln!("Validation failed:");
    eprintln!("{table}");
}

pub fn print_schedules(schedules: &[Schedule]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Schedule"),
        header_cell("Cron"),
        header_cell("Timezone"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for schedule in schedules {
        table.add_row(vec![
            Cell::new(schedule.name),
            Cell::new(schedule.cron),
            Cell::new(schedule.timezone),
            Cell::new(schedule.description),
        ]);
    }
    println!("{table}");
}

fn print_link_table(summary: &LinkSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Linkage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Matched"), count_cell(summary.matched, Color::Green)]);
    table.add_row(vec![
        Cell::new("Metacritic only"),
        count_cell(summary.unmatched_reviews, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Steam only"),
        count_cell(summary.unmatched_store, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Shared Steam matches"),
        count_cell(summary.shared_store_matches, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_rows()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn source_row(stage: &SourceStage) -> Vec<Cell> {
    vec![
        Cell::new(stage.source.label()),
        Cell::new(stage.raw_records),
        Cell::new(stage.records),
        dim_cell(stage.path.display()),
    ]
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
