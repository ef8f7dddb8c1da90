use cf_domain::guid::Guid;
use serde::Deserialize;

/// Cloud Controller v2 资源信封：`{"metadata": {...}, "entity": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceEnvelope<E> {
    pub metadata: ResourceMetadata,
    pub entity: E,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceMetadata {
    pub guid: Guid,
    #[serde(default)]
    pub url: Option<String>,
}

/// 分页列表；仅按名称精确过滤时使用首页
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResources<E> {
    #[serde(default)]
    pub total_results: usize,
    #[serde(default = "Vec::new")]
    pub resources: Vec<ResourceEnvelope<E>>,
    #[serde(default)]
    pub next_url: Option<String>,
}
