//! 资源模型过程宏（cf-macros）
//!
//! - `#[resource]`：为平台资源结构体补齐 `guid`/`name` 字段并实现 `Resource`；
//! - `#[guid]`：为单字段 tuple struct 生成标识符常用实现；
//! - `#[value_object]`：为无标识的值类型合并默认派生。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod field_utils;
mod guid;
mod resource;
mod value_object;

/// 资源宏
/// - 若缺失则追加字段：`guid: Guid`, `name: String`，并置于字段最前
/// - 自动实现 `::cf_domain::resource::Resource`（KIND/name/guid）
/// - 支持参数：`#[resource(kind = "app", debug = true|false)]`
#[proc_macro_attribute]
pub fn resource(attr: TokenStream, item: TokenStream) -> TokenStream {
    resource::expand(attr, item)
}

/// 标识符宏
/// 用于 `struct Guid(String);` 这类包装类型，生成 new/Display/FromStr/From 等实现。
#[proc_macro_attribute]
pub fn guid(attr: TokenStream, item: TokenStream) -> TokenStream {
    guid::expand(attr, item)
}

/// 值对象宏
/// 合并/追加派生：Debug（可关闭）, Clone, Default, Serialize, Deserialize, PartialEq, Eq
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
