use crate::{command::Command, error::CommandError};
use dashmap::DashMap;
use std::sync::Arc;

/// 命令注册表
/// - 以命令名与别名为键注册同一命令实例
/// - 重复注册（名称或别名冲突）返回错误
pub struct CommandRegistry {
    commands: DashMap<&'static str, Arc<dyn Command>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self {
            commands: DashMap::new(),
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令
    pub fn register(&self, command: Arc<dyn Command>) -> Result<(), CommandError> {
        let metadata = command.metadata();
        let keys: Vec<&'static str> = std::iter::once(metadata.name)
            .chain(metadata.short_name)
            .collect();

        if let Some(taken) = keys.iter().find(|k| self.commands.contains_key(*k)) {
            return Err(CommandError::AlreadyRegistered(*taken));
        }

        for key in keys {
            self.commands.insert(key, command.clone());
        }
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).map(|c| c.clone())
    }

    /// 已注册的命令名（不含别名），按字母序
    pub fn registered_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .commands
            .iter()
            .filter(|e| e.value().metadata().name == *e.key())
            .map(|e| *e.key())
            .collect();
        names.sort_unstable();
        names
    }
}
