//! 测试替身（cf-testhelpers）
//!
//! 以 trait 的第二种实现替换 UI、仓储与前置条件解析，记录调用以便断言。
//!
pub mod assert;
pub mod commands;
pub mod gateway;
pub mod repositories;
pub mod requirements;
pub mod session;
pub mod ui;

pub use assert::{assert_slice_contains, assert_slice_does_not_contain, slice_contains};
pub use commands::run_command;
pub use gateway::{FakeGateway, FakeResponse, RecordedRequest};
pub use repositories::{FakeServiceBindingRepo, FakeServiceSummaryRepo};
pub use requirements::FakeRequirementResolver;
pub use session::{session_with_defaults, session_without_login};
pub use ui::FakeUi;
