//! Sorts a small plant table and prints it after each header activation.
//!
//! Run with `cargo run -p garden-table --example sort_table`.

use garden_table::{Cell, FilterState, Row, SortConfig, SortHeader, TabState, Table};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn print_table(table: &Table) {
    for (key, class) in table.header_classes() {
        print!("{key}[{}] ", class.unwrap_or("-"));
    }
    println!();
    for row in table.rows() {
        let cells: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
        println!("  {}", cells.join(" | "));
    }
}

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let config = SortConfig::from_json(r#"{ "missing": "last" }"#).expect("Invalid config");

    let rows = [
        ("1", "Tomato", "Solanaceae", "90"),
        ("2", "Basil", "Lamiaceae", "60"),
        ("3", "Carrot", "Apiaceae", "75"),
        ("4", "Garlic", "Amaryllidaceae", "240"),
    ]
    .into_iter()
    .map(|(id, name, family, days)| {
        Row::new(id)
            .cell(Cell::sortable("name", name))
            .cell(Cell::sortable("family", family))
            .cell(Cell::sortable("days", days))
    })
    .chain(std::iter::once(
        Row::new("5").cell(Cell::new("(unnamed seedling)")),
    ))
    .collect();

    let mut table = Table::with_rows(
        vec![
            SortHeader::new("name", "Plant"),
            SortHeader::new("family", "Family"),
            SortHeader::new("days", "Days to harvest"),
        ],
        rows,
    )
    .config(config);

    for column in ["name", "name", "days"] {
        match table.activate(column) {
            Ok(outcome) => {
                for missing in &outcome.missing {
                    println!("warning: {missing}");
                }
                print_table(&table);
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    let tabs = TabState::new(["overview", "care", "harvest"]).select_tab("care");
    let filters = FilterState::new(["herbs", "vegetables"]).select_filter("herbs");
    println!(
        "tab: {}, filter: {}",
        tabs.selected().unwrap_or("-"),
        filters.selected().unwrap_or("-")
    );
}
