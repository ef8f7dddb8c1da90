//! 命令执行层（cf-application）
//!
//! 一条命令的执行流程：
//! 1. 命令校验参数个数并声明有序的前置条件（`requirement`）；
//! 2. 执行器（`runner`）按声明顺序逐一解析，首个失败即中止；
//! 3. 全部满足后调用命令动作，由动作访问远端仓储（`api`）并向 `ui` 输出结果。
//!
//! UI、仓储与前置条件解析均以 trait 注入，生产实现与测试替身可互换。
pub mod api;
pub mod command;
pub mod commands;
pub mod context;
pub mod error;
pub mod registry;
pub mod requirement;
pub mod requirement_resolver;
pub mod runner;
pub mod ui;

pub use registry::CommandRegistry;
pub use runner::{CommandRunner, ExitStatus, RunReport};
