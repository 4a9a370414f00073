use std::collections::{HashMap, HashSet};

use crate::error::AuthzError;
use crate::types::{PermissionDef, PermissionId};

/// The closed permission enumeration, grouped the way the role editor
/// presents it: module, then subgroup, then `(id, label, description)`.
///
/// Labels and subgroup names are globally unique; selection state is keyed by
/// subgroup name alone and the label → id mapping must be a function.
pub const CATALOG: &[(&str, &[(&str, &[(u32, &str, &str)])])] = &[
    (
        "Dashboard",
        &[(
            "Resumen",
            &[(1, "Ver resumen", "Resumen general de la empresa")],
        )],
    ),
    (
        "Oficina",
        &[
            (
                "Personal",
                &[
                    (10, "Ver personal", "Listado de empleados"),
                    (11, "Crear personal", "Alta de empleados"),
                    (12, "Editar personal", "Modificar datos de empleados"),
                    (13, "Eliminar personal", "Baja de empleados"),
                ],
            ),
            (
                "Roles",
                &[
                    (20, "Ver roles", "Listado de roles y sus permisos"),
                    (21, "Crear roles", "Definir nuevos roles"),
                    (22, "Editar roles", "Modificar permisos de un rol"),
                    (23, "Eliminar roles", "Eliminar roles sin usuarios"),
                ],
            ),
            (
                "Proveedores",
                &[
                    (30, "Ver proveedores", "Listado de proveedores"),
                    (31, "Crear proveedores", "Alta de proveedores"),
                    (32, "Editar proveedores", "Modificar datos de proveedores"),
                    (33, "Eliminar proveedores", "Baja de proveedores"),
                ],
            ),
        ],
    ),
    (
        "Proyectos",
        &[
            (
                "Listado",
                &[
                    (40, "Ver proyectos", "Listado de proyectos"),
                    (41, "Crear proyectos", "Alta de proyectos"),
                    (42, "Editar proyectos", "Modificar datos de proyectos"),
                    (43, "Eliminar proyectos", "Baja de proyectos"),
                ],
            ),
            (
                "Inventario",
                &[
                    (50, "Ver inventario", "Materiales del proyecto"),
                    (51, "Registrar entradas", "Entradas de material"),
                    (52, "Registrar salidas", "Salidas de material"),
                    (53, "Editar inventario", "Correcciones de inventario"),
                ],
            ),
            (
                "Pagos",
                &[
                    (60, "Ver pagos", "Pagos del proyecto"),
                    (61, "Registrar pagos", "Registrar nuevos pagos"),
                    (62, "Editar pagos", "Modificar pagos registrados"),
                ],
            ),
            (
                "Tipos de pago",
                &[
                    (70, "Ver tipos de pago", "Catálogo de tipos de pago"),
                    (71, "Configurar tipos de pago", "Alta y edición de tipos de pago"),
                ],
            ),
        ],
    ),
    (
        "Maquinaria",
        &[
            (
                "Equipos",
                &[
                    (80, "Ver equipos", "Listado de maquinaria"),
                    (81, "Crear equipos", "Alta de maquinaria"),
                    (82, "Editar equipos", "Modificar datos de maquinaria"),
                    (83, "Eliminar equipos", "Baja de maquinaria"),
                ],
            ),
            (
                "Mantenimiento",
                &[
                    (90, "Ver mantenimiento", "Historial de mantenimiento"),
                    (91, "Registrar mantenimiento", "Registrar intervenciones"),
                ],
            ),
        ],
    ),
];

#[derive(Debug, Clone)]
pub struct Subgroup {
    pub name: String,
    pub permissions: Vec<PermissionDef>,
}

#[derive(Debug, Clone)]
pub struct ModuleGroup {
    pub name: String,
    pub subgroups: Vec<Subgroup>,
}

/// Owned view over a permission taxonomy. Order is presentation order.
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<ModuleGroup>,
}

impl Catalog {
    pub fn new(modules: Vec<ModuleGroup>) -> Self {
        Self { modules }
    }

    /// The platform's permission enumeration from [`CATALOG`].
    pub fn builtin() -> Self {
        let modules = CATALOG
            .iter()
            .map(|(module, subgroups)| ModuleGroup {
                name: (*module).to_string(),
                subgroups: subgroups
                    .iter()
                    .map(|(name, permissions)| Subgroup {
                        name: (*name).to_string(),
                        permissions: permissions
                            .iter()
                            .map(|(id, label, description)| PermissionDef {
                                id: PermissionId(*id),
                                label: (*label).to_string(),
                                description: (*description).to_string(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { modules }
    }

    pub fn modules(&self) -> &[ModuleGroup] {
        &self.modules
    }

    /// Check the structural invariants: ids, labels, and subgroup names are
    /// globally unique.
    pub fn validate(&self) -> Result<(), AuthzError> {
        let mut ids = HashSet::new();
        let mut labels = HashSet::new();
        let mut subgroups = HashSet::new();
        for module in &self.modules {
            for subgroup in &module.subgroups {
                if !subgroups.insert(subgroup.name.clone()) {
                    return Err(AuthzError::DuplicateSubgroup(subgroup.name.clone()));
                }
                for def in &subgroup.permissions {
                    if !ids.insert(def.id) {
                        return Err(AuthzError::DuplicateId(def.id));
                    }
                    if !labels.insert(def.label.clone()) {
                        return Err(AuthzError::DuplicateLabel(def.label.clone()));
                    }
                }
            }
        }
        Ok(())
    }

    /// The label → id mapping used for flattening selections.
    pub fn label_index(&self) -> HashMap<String, PermissionId> {
        self.iter()
            .map(|(_, _, def)| (def.label.clone(), def.id))
            .collect()
    }

    pub fn subgroup(&self, name: &str) -> Option<&Subgroup> {
        self.modules
            .iter()
            .flat_map(|m| m.subgroups.iter())
            .find(|sg| sg.name == name)
    }

    /// Resolve an id back to its catalog entry.
    pub fn def_for(&self, id: PermissionId) -> Option<(&str, &str, &PermissionDef)> {
        self.iter().find(|(_, _, def)| def.id == id)
    }

    pub fn contains_id(&self, id: PermissionId) -> bool {
        self.def_for(id).is_some()
    }

    /// Iterate `(module, subgroup, def)` in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &PermissionDef)> {
        self.modules.iter().flat_map(|m| {
            m.subgroups.iter().flat_map(move |sg| {
                sg.permissions
                    .iter()
                    .map(move |def| (m.name.as_str(), sg.name.as_str(), def))
            })
        })
    }

    /// Total number of permissions.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
