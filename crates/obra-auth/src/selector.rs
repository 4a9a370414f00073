use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::types::PermissionId;

/// Last-saved permission-id set, held as an explicit value with exactly two
/// operations. Ids are kept sorted and deduplicated so comparisons are
/// element-wise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    ids: Vec<PermissionId>,
}

impl Snapshot {
    pub fn new(ids: &[PermissionId]) -> Self {
        Self {
            ids: sorted_unique(ids),
        }
    }

    pub fn ids(&self) -> &[PermissionId] {
        &self.ids
    }

    pub fn reset(&mut self, ids: &[PermissionId]) {
        self.ids = sorted_unique(ids);
    }
}

/// Editable selection state for one role, bridging the flat permission-id
/// list (the wire format) and the grouped label taxonomy the editor shows.
///
/// Each instance owns its state independently; the catalog is injected at
/// construction and never consulted ambiently.
#[derive(Debug, Clone)]
pub struct RoleSelection {
    catalog: Arc<Catalog>,
    label_ids: HashMap<String, PermissionId>,
    /// Subgroup name → selected labels, in selection order.
    selected: BTreeMap<String, Vec<String>>,
    snapshot: Snapshot,
}

impl RoleSelection {
    pub fn new(catalog: Arc<Catalog>, initial_ids: &[PermissionId]) -> Self {
        let label_ids = catalog.label_index();
        let selected = derive_selection(&catalog, initial_ids);
        Self {
            catalog,
            label_ids,
            selected,
            snapshot: Snapshot::new(initial_ids),
        }
    }

    /// Re-derive selection and snapshot from a later-arriving id list.
    ///
    /// An empty list is ignored: "not yet loaded" and "loaded as empty" are
    /// indistinguishable through this path, so a caller cannot clear a role
    /// to zero permissions here. Construct a fresh selection for that.
    pub fn rehydrate(&mut self, ids: &[PermissionId]) {
        if ids.is_empty() {
            return;
        }
        self.selected = derive_selection(&self.catalog, ids);
        self.snapshot.reset(ids);
    }

    /// Flip membership of a label in a subgroup's selection. No validation:
    /// a label outside the taxonomy is tracked like any other and simply
    /// drops out at flattening time.
    pub fn toggle(&mut self, subgroup: &str, label: &str) {
        let labels = self.selected.entry(subgroup.to_string()).or_default();
        if let Some(position) = labels.iter().position(|l| l == label) {
            labels.remove(position);
        } else {
            labels.push(label.to_string());
        }
    }

    /// Select every label the taxonomy lists for a subgroup. Unknown
    /// subgroups are a no-op.
    pub fn select_all(&mut self, subgroup: &str) {
        let Some(labels) = self
            .catalog
            .subgroup(subgroup)
            .map(|sg| sg.permissions.iter().map(|p| p.label.clone()).collect::<Vec<_>>())
        else {
            return;
        };
        self.selected.insert(subgroup.to_string(), labels);
    }

    pub fn deselect_all(&mut self, subgroup: &str) {
        self.selected.insert(subgroup.to_string(), Vec::new());
    }

    pub fn is_selected(&self, subgroup: &str, label: &str) -> bool {
        self.selected
            .get(subgroup)
            .is_some_and(|labels| labels.iter().any(|l| l == label))
    }

    pub fn selected_count(&self, subgroup: &str) -> usize {
        self.selected.get(subgroup).map_or(0, |labels| labels.len())
    }

    /// Whether the whole subgroup is selected.
    ///
    /// Compares counts, not label sets, matching the editor's historical
    /// behavior; see DESIGN.md for why this is kept as-is.
    pub fn all_selected(&self, subgroup: &str) -> bool {
        let total = self
            .catalog
            .subgroup(subgroup)
            .map_or(0, |sg| sg.permissions.len());
        self.selected_count(subgroup) == total
    }

    /// Selected labels of one subgroup, in selection order.
    pub fn selected_labels(&self, subgroup: &str) -> &[String] {
        self.selected
            .get(subgroup)
            .map_or(&[], |labels| labels.as_slice())
    }

    /// The canonical persistence format: every selected label mapped through
    /// the label index, deduplicated, ascending. Labels with no mapping are
    /// silently dropped.
    pub fn to_flat_ids(&self) -> Vec<PermissionId> {
        let ids: BTreeSet<PermissionId> = self
            .selected
            .values()
            .flatten()
            .filter_map(|label| self.label_ids.get(label).copied())
            .collect();
        ids.into_iter().collect()
    }

    /// Whether the effective id set differs from the last-saved snapshot.
    pub fn is_dirty(&self) -> bool {
        self.to_flat_ids().as_slice() != self.snapshot.ids()
    }

    /// Adopt the current selection as the saved state, after a successful
    /// persist.
    pub fn mark_as_saved(&mut self) {
        let ids = self.to_flat_ids();
        self.snapshot.reset(&ids);
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

/// Per-subgroup selected labels for an id set: a label is selected iff its
/// id is in the set. Every subgroup gets an entry, possibly empty.
fn derive_selection(catalog: &Catalog, ids: &[PermissionId]) -> BTreeMap<String, Vec<String>> {
    let ids: HashSet<PermissionId> = ids.iter().copied().collect();
    let mut selected = BTreeMap::new();
    for module in catalog.modules() {
        for subgroup in &module.subgroups {
            let labels: Vec<String> = subgroup
                .permissions
                .iter()
                .filter(|def| ids.contains(&def.id))
                .map(|def| def.label.clone())
                .collect();
            selected.insert(subgroup.name.clone(), labels);
        }
    }
    selected
}

fn sorted_unique(ids: &[PermissionId]) -> Vec<PermissionId> {
    let set: BTreeSet<PermissionId> = ids.iter().copied().collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ModuleGroup, Subgroup};
    use crate::types::PermissionDef;

    fn ids(raw: &[u32]) -> Vec<PermissionId> {
        raw.iter().copied().map(PermissionId).collect()
    }

    /// Taxonomy { "Inventario": { "Materiales": ["Ver", "Editar"] } } with
    /// labels Ver=1, Editar=2.
    fn materiales_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![ModuleGroup {
            name: "Inventario".to_string(),
            subgroups: vec![Subgroup {
                name: "Materiales".to_string(),
                permissions: vec![
                    PermissionDef {
                        id: PermissionId(1),
                        label: "Ver".to_string(),
                        description: String::new(),
                    },
                    PermissionDef {
                        id: PermissionId(2),
                        label: "Editar".to_string(),
                        description: String::new(),
                    },
                ],
            }],
        }]))
    }

    #[test]
    fn example_scenario() {
        let mut selection = RoleSelection::new(materiales_catalog(), &ids(&[1]));
        assert_eq!(selection.selected_labels("Materiales"), ["Ver"]);
        assert!(!selection.is_dirty());

        selection.toggle("Materiales", "Editar");
        assert_eq!(selection.selected_labels("Materiales"), ["Ver", "Editar"]);
        assert_eq!(selection.to_flat_ids(), ids(&[1, 2]));
        assert!(selection.is_dirty());
    }

    #[test]
    fn flat_ids_are_order_independent() {
        let catalog = materiales_catalog();
        let mut a = RoleSelection::new(catalog.clone(), &[]);
        a.toggle("Materiales", "Ver");
        a.toggle("Materiales", "Editar");

        let mut b = RoleSelection::new(catalog, &[]);
        b.toggle("Materiales", "Editar");
        b.toggle("Materiales", "Ver");

        assert_eq!(a.to_flat_ids(), b.to_flat_ids());
        assert_eq!(a.to_flat_ids(), ids(&[1, 2]));
    }

    #[test]
    fn dirty_lifecycle() {
        let mut selection = RoleSelection::new(materiales_catalog(), &ids(&[1]));
        assert!(!selection.is_dirty());

        selection.toggle("Materiales", "Editar");
        assert!(selection.is_dirty());

        // Reversing the same toggle lands back on the snapshot.
        selection.toggle("Materiales", "Editar");
        assert!(!selection.is_dirty());

        selection.toggle("Materiales", "Editar");
        selection.mark_as_saved();
        assert!(!selection.is_dirty());
        assert_eq!(selection.snapshot().ids(), ids(&[1, 2]));
    }

    #[test]
    fn rehydrate_ignores_empty_but_adopts_values() {
        let catalog = materiales_catalog();

        // Mounted before the role loaded, then the fetch resolves.
        let mut selection = RoleSelection::new(catalog.clone(), &[]);
        selection.rehydrate(&ids(&[2]));
        assert_eq!(selection.selected_labels("Materiales"), ["Editar"]);
        assert_eq!(selection.snapshot().ids(), ids(&[2]));
        assert!(!selection.is_dirty());

        // A later empty list never resets loaded state.
        let mut selection = RoleSelection::new(catalog, &ids(&[1, 2]));
        selection.rehydrate(&[]);
        assert_eq!(selection.to_flat_ids(), ids(&[1, 2]));
        assert!(!selection.is_dirty());
    }

    #[test]
    fn select_all_and_deselect_all() {
        let mut selection = RoleSelection::new(materiales_catalog(), &[]);
        assert!(!selection.all_selected("Materiales"));

        selection.select_all("Materiales");
        assert!(selection.all_selected("Materiales"));
        assert_eq!(selection.selected_count("Materiales"), 2);
        assert!(selection.is_selected("Materiales", "Ver"));

        selection.deselect_all("Materiales");
        assert_eq!(selection.selected_count("Materiales"), 0);
        assert!(!selection.is_selected("Materiales", "Ver"));

        // Unknown subgroups are ignored.
        selection.select_all("Herramientas");
        assert_eq!(selection.to_flat_ids(), ids(&[]));
    }

    #[test]
    fn unknown_labels_count_but_do_not_flatten() {
        let mut selection = RoleSelection::new(materiales_catalog(), &[]);
        selection.toggle("Materiales", "Inexistente");
        assert!(selection.is_selected("Materiales", "Inexistente"));
        assert_eq!(selection.selected_count("Materiales"), 1);
        assert_eq!(selection.to_flat_ids(), ids(&[]));
        // Toggling it back off works the same way.
        selection.toggle("Materiales", "Inexistente");
        assert_eq!(selection.selected_count("Materiales"), 0);
    }

    #[test]
    fn duplicate_initial_ids_do_not_read_as_dirty() {
        let selection = RoleSelection::new(materiales_catalog(), &ids(&[1, 1, 2]));
        assert!(!selection.is_dirty());
        assert_eq!(selection.snapshot().ids(), ids(&[1, 2]));
    }

    #[test]
    fn initial_ids_outside_catalog_are_dropped_from_selection() {
        let selection = RoleSelection::new(materiales_catalog(), &ids(&[1, 99]));
        assert_eq!(selection.selected_labels("Materiales"), ["Ver"]);
        // The unknown id stays in the snapshot, so the selection reads as
        // dirty until saved; saving drops it for good.
        assert!(selection.is_dirty());
        let mut selection = selection;
        selection.mark_as_saved();
        assert!(!selection.is_dirty());
        assert_eq!(selection.snapshot().ids(), ids(&[1]));
    }

    #[test]
    fn builtin_catalog_round_trip() {
        let catalog = Arc::new(Catalog::builtin());
        let initial = ids(&[20, 21, 50]);
        let selection = RoleSelection::new(catalog, &initial);
        assert_eq!(selection.selected_labels("Roles"), ["Ver roles", "Crear roles"]);
        assert_eq!(selection.selected_labels("Inventario"), ["Ver inventario"]);
        assert_eq!(selection.to_flat_ids(), initial);
        assert!(!selection.is_dirty());
    }
}
