//! 终端输出（UI Reporter）
//!
//! 命令与执行器只通过 [`Ui`] 输出：普通行、`OK`、警告，以及两种终止信号
//! `failed`（运行期失败）与 `fail_with_usage`（用法错误）。输出只追加，不回滚。
//!
use crate::command::CommandMetadata;
use console::style;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

pub trait Ui: Send + Sync {
    fn say(&self, message: &str);

    fn warn(&self, message: &str);

    fn ok(&self);

    fn failed(&self, message: &str);

    fn fail_with_usage(&self, command: &CommandMetadata);

    /// 首行为表头
    fn display_table(&self, rows: &[Vec<String>]);
}

impl<T> Ui for Arc<T>
where
    T: Ui + ?Sized,
{
    fn say(&self, message: &str) {
        (**self).say(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn ok(&self) {
        (**self).ok()
    }

    fn failed(&self, message: &str) {
        (**self).failed(message)
    }

    fn fail_with_usage(&self, command: &CommandMetadata) {
        (**self).fail_with_usage(command)
    }

    fn display_table(&self, rows: &[Vec<String>]) {
        (**self).display_table(rows)
    }
}

/// 资源名高亮
pub fn entity_name(name: &str) -> String {
    style(name).cyan().bold().to_string()
}

/// 写入任意输出流的终端实现；默认写 stdout
pub struct TerminalUi<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalUi<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalUi<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_line(&self, line: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // 输出端已关闭（如管道被截断）时无处可报，直接忽略
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

impl<W: Write + Send> Ui for TerminalUi<W> {
    fn say(&self, message: &str) {
        self.write_line(message);
    }

    fn warn(&self, message: &str) {
        self.write_line(&style(message).magenta().to_string());
    }

    fn ok(&self) {
        self.write_line(&style("OK").green().bold().to_string());
    }

    fn failed(&self, message: &str) {
        self.write_line(&style("FAILED").red().bold().to_string());
        self.write_line(message);
    }

    fn fail_with_usage(&self, command: &CommandMetadata) {
        self.write_line(&style("FAILED").red().bold().to_string());
        self.write_line("Incorrect Usage.");
        self.write_line("");
        self.write_line(&format!("NAME:\n   {} - {}", command.name, command.description));
        self.write_line("");
        self.write_line(&format!("USAGE:\n   {}", command.usage));
        if let Some(alias) = command.short_name {
            self.write_line("");
            self.write_line(&format!("ALIAS:\n   {alias}"));
        }
    }

    fn display_table(&self, rows: &[Vec<String>]) {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|c| {
                rows.iter()
                    .filter_map(|row| row.get(c))
                    .map(|cell| console::measure_text_width(cell))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (i, row) in rows.iter().enumerate() {
            let mut line = String::new();
            for (c, cell) in row.iter().enumerate() {
                let is_last = c + 1 == row.len();
                let text = if i == 0 {
                    style(cell).bold().to_string()
                } else {
                    cell.clone()
                };
                line.push_str(&text);
                if !is_last {
                    let pad = widths[c] - console::measure_text_width(cell) + 3;
                    line.push_str(&" ".repeat(pad));
                }
            }
            self.write_line(line.trim_end());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&TerminalUi<Vec<u8>>)) -> String {
        console::set_colors_enabled(false);
        let ui = TerminalUi::new(Vec::new());
        f(&ui);
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn ok_and_failed_lines() {
        let out = render(|ui| {
            ui.say("Binding service...");
            ui.ok();
            ui.failed("Server error");
        });
        assert_eq!(out, "Binding service...\nOK\nFAILED\nServer error\n");
    }

    #[test]
    fn usage_includes_name_and_usage_line() {
        let metadata = CommandMetadata {
            name: "bind-service",
            short_name: Some("bs"),
            description: "Bind a service instance to an app",
            usage: "cf bind-service APP SERVICE_INSTANCE",
        };
        let out = render(|ui| ui.fail_with_usage(&metadata));
        assert!(out.starts_with("FAILED\nIncorrect Usage.\n"));
        assert!(out.contains("bind-service - Bind a service instance to an app"));
        assert!(out.contains("cf bind-service APP SERVICE_INSTANCE"));
        assert!(out.contains("bs"));
    }

    #[test]
    fn table_columns_are_aligned() {
        let rows = vec![
            vec!["name".to_string(), "plan".to_string()],
            vec!["my-service".to_string(), "small".to_string()],
        ];
        let out = render(|ui| ui.display_table(&rows));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "name         plan");
        assert_eq!(lines[1], "my-service   small");
    }
}
