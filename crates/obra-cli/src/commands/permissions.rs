use anyhow::Result;

use obra_auth::Catalog;
use obra_core::filter::TextSearch;

struct Row {
    module: String,
    subgroup: String,
    id: u32,
    label: String,
    description: String,
}

pub fn run(filter: Option<&str>) -> Result<()> {
    let catalog = Catalog::builtin();
    catalog.validate()?;

    let rows: Vec<Row> = catalog
        .iter()
        .map(|(module, subgroup, def)| Row {
            module: module.to_string(),
            subgroup: subgroup.to_string(),
            id: def.id.0,
            label: def.label.clone(),
            description: def.description.clone(),
        })
        .collect();

    let search = TextSearch::new()
        .field(|r: &Row| r.module.clone())
        .field(|r: &Row| r.subgroup.clone())
        .field(|r: &Row| r.label.clone())
        .field(|r: &Row| r.description.clone());

    let visible: Vec<&Row> = match filter {
        Some(query) => search.apply(&rows, query),
        None => rows.iter().collect(),
    };

    if visible.is_empty() {
        println!("No permissions match.");
        return Ok(());
    }

    let mut last_module = "";
    let mut last_subgroup = "";
    for row in &visible {
        if row.module != last_module {
            println!("{}", row.module);
            last_module = &row.module;
            last_subgroup = "";
        }
        if row.subgroup != last_subgroup {
            println!("  {}", row.subgroup);
            last_subgroup = &row.subgroup;
        }
        println!("    {:>3}  {:<28} {}", row.id, row.label, row.description);
    }

    Ok(())
}
