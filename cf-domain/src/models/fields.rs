use crate::guid::Guid;
use cf_macros::value_object;

/// 组织摘要（name + guid）
#[value_object]
pub struct OrganizationFields {
    pub guid: Guid,
    pub name: String,
}

/// 空间摘要（name + guid）
#[value_object]
pub struct SpaceFields {
    pub guid: Guid,
    pub name: String,
}

#[value_object]
pub struct ServicePlanFields {
    pub guid: Guid,
    pub name: String,
}

/// 服务产品摘要，`label` 即 `cf marketplace` 中的服务名
#[value_object]
pub struct ServiceOfferingFields {
    pub guid: Guid,
    pub label: String,
}
