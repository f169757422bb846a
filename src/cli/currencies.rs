use super::ui;
use crate::core::Catalog;
use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn run(catalog: &Catalog) -> Result<()> {
    println!(
        "{}",
        ui::style_text("Supported currencies", ui::StyleType::Title)
    );
    println!("{}", build_table(catalog));
    Ok(())
}

fn build_table(catalog: &Catalog) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Name")]);
    for currency in catalog.iter() {
        table.add_row(vec![Cell::new(&currency.code), Cell::new(&currency.name)]);
    }
    table
}
