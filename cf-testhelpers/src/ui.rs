use cf_application::command::CommandMetadata;
use cf_application::ui::Ui;
use std::sync::Mutex;

/// 记录输出行的 UI 替身；记录前去除终端样式
#[derive(Default)]
pub struct FakeUi {
    outputs: Mutex<Vec<String>>,
    failed: Mutex<Option<String>>,
    failed_with_usage: Mutex<bool>,
}

impl FakeUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }

    pub fn failed_with_usage(&self) -> bool {
        *self.failed_with_usage.lock().unwrap()
    }

    /// `failed` 收到的消息；未失败时为 `None`
    pub fn failure_message(&self) -> Option<String> {
        self.failed.lock().unwrap().clone()
    }

    fn push(&self, message: &str) {
        let plain = console::strip_ansi_codes(message);
        self.outputs
            .lock()
            .unwrap()
            .extend(plain.split('\n').map(str::to_string));
    }
}

impl Ui for FakeUi {
    fn say(&self, message: &str) {
        self.push(message);
    }

    fn warn(&self, message: &str) {
        self.push(message);
    }

    fn ok(&self) {
        self.push("OK");
    }

    fn failed(&self, message: &str) {
        self.push("FAILED");
        self.push(message);
        *self.failed.lock().unwrap() = Some(message.to_string());
    }

    fn fail_with_usage(&self, command: &CommandMetadata) {
        self.push("FAILED");
        self.push("Incorrect Usage.");
        self.push(command.usage);
        *self.failed_with_usage.lock().unwrap() = true;
    }

    fn display_table(&self, rows: &[Vec<String>]) {
        for row in rows {
            self.push(&row.join("  "));
        }
    }
}
