use crate::types::PermissionId;

#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    #[error("duplicate permission id {0}")]
    DuplicateId(PermissionId),

    #[error("duplicate permission label '{0}'")]
    DuplicateLabel(String),

    #[error("duplicate subgroup '{0}'")]
    DuplicateSubgroup(String),

    #[error("duplicate route pattern '{0}'")]
    DuplicateRoute(String),

    #[error("route '{0}' references unknown permission id {1}")]
    UnknownRoutePermission(String, PermissionId),
}
