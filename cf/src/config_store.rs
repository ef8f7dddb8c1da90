//! 会话配置文件
//!
//! 查找顺序：`--config` 指定路径 > `$CF_HOME/.cf/config.json` > `$HOME/.cf/config.json`。
//! 文件不存在时返回默认（未登录）会话。
//!
use cf_domain::session::Session;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not determine config location: neither CF_HOME nor HOME is set")]
    NoHome,

    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// 解析配置文件路径；`lookup` 用于读取环境变量
pub fn config_path(
    explicit: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let home = lookup("CF_HOME")
        .filter(|v| !v.is_empty())
        .or_else(|| lookup("HOME").filter(|v| !v.is_empty()))
        .ok_or(ConfigError::NoHome)?;
    Ok(PathBuf::from(home).join(".cf").join("config.json"))
}

pub fn load(path: &Path) -> Result<Session, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using empty session");
            return Ok(Session::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
