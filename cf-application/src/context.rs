use bon::Builder;

/// 命令上下文（Command Context）
///
/// 承载一次命令调用的输入：命令名、位置参数，以及用于日志与请求追踪的关联 ID。
///
/// ```rust
/// use cf_application::context::CommandContext;
///
/// let ctx = CommandContext::new("bind-service", ["my-app", "my-service"]);
/// assert_eq!(ctx.arg(0), Some("my-app"));
/// assert_eq!(ctx.args().len(), 2);
/// ```
#[derive(Builder, Clone, Debug)]
pub struct CommandContext {
    #[builder(into)]
    name: String,
    #[builder(default)]
    args: Vec<String>,
    /// 关联 ID：贯穿日志 span 与发往后端的请求头
    #[builder(into, default = uuid::Uuid::new_v4().to_string())]
    correlation_id: String,
}

impl CommandContext {
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder()
            .name(name)
            .args(args.into_iter().map(Into::into).collect())
            .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_is_generated_per_context() {
        let a = CommandContext::new("services", Vec::<String>::new());
        let b = CommandContext::new("services", Vec::<String>::new());
        assert!(!a.correlation_id().is_empty());
        assert_ne!(a.correlation_id(), b.correlation_id());
    }

    #[test]
    fn explicit_correlation_id_is_kept() {
        let ctx = CommandContext::builder()
            .name("bind-service")
            .correlation_id("req-1")
            .build();
        assert_eq!(ctx.correlation_id(), "req-1");
        assert!(ctx.args().is_empty());
        assert_eq!(ctx.arg(0), None);
    }
}
