//! CLI command for printing the hierarchy as an indented outline

use hiercore::record::NAME_FIELD;

use super::render::{GridInputs, load_grid};

pub fn execute(inputs: &GridInputs<'_>, collapsed: bool) -> anyhow::Result<()> {
    let mut grid = load_grid(inputs)?;

    println!("{}", grid.title());
    let labels: Vec<&str> = grid.columns().iter().map(|c| c.label.as_str()).collect();
    if !labels.is_empty() {
        println!("Columns: {}", labels.join(", "));
    }

    let mut view = grid.view();
    if !collapsed {
        grid.toggle_expand_all(Some(&mut view));
    }

    for (row, node) in view.visible_rows() {
        let marker = if node.is_current_record() { '*' } else { '-' };
        let id = row.id.as_deref().unwrap_or("?");
        let indent = "  ".repeat(row.depth);
        match node.get_str(NAME_FIELD) {
            Some(name) if !name.is_empty() => println!("{indent}{marker} {name} ({id})"),
            _ => println!("{indent}{marker} {id}"),
        }
    }

    if grid.forest().is_empty() {
        println!("(no records)");
    }
    Ok(())
}
