use anyhow::Result;

use obra_auth::{Catalog, RouteMap};

pub fn run() -> Result<()> {
    let catalog = Catalog::builtin();
    let map = RouteMap::builtin();
    map.validate(&catalog)?;

    println!("Route permission map ({} entries):", map.entries().len());
    for (path, id) in map.entries() {
        let label = catalog
            .def_for(*id)
            .map(|(_, _, def)| def.label.as_str())
            .unwrap_or("?");
        println!("  {:<40} {:>3}  {}", path, id.0, label);
    }

    Ok(())
}
