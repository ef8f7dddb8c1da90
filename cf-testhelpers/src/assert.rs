//! 输出断言
//!
//! 期望行按顺序出现在实际输出中（中间可夹杂其他行），
//! 每个期望行给出若干子串，需全部包含于同一实际行。

pub fn slice_contains(actual: &[String], expected: &[&[&str]]) -> bool {
    let mut remaining = expected.iter().peekable();
    for line in actual {
        match remaining.peek() {
            Some(parts) if parts.iter().all(|p| line.contains(p)) => {
                remaining.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    remaining.peek().is_none()
}

#[track_caller]
pub fn assert_slice_contains(actual: &[String], expected: &[&[&str]]) {
    assert!(
        slice_contains(actual, expected),
        "expected lines {expected:?} in order, got:\n{}",
        actual.join("\n")
    );
}

/// 任一实际行不得同时包含给定的全部子串
#[track_caller]
pub fn assert_slice_does_not_contain(actual: &[String], parts: &[&str]) {
    if let Some(line) = actual.iter().find(|l| parts.iter().all(|p| l.contains(p))) {
        panic!("unexpected line {line:?} matching {parts:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_in_order_with_gaps() {
        let out = lines(&["Binding service a to app b", "noise", "OK", "TIP: push"]);
        assert!(slice_contains(&out, &[&["Binding service", "a"], &["OK"], &["TIP"]]));
        assert!(!slice_contains(&out, &[&["TIP"], &["OK"]]));
        assert!(!slice_contains(&out, &[&["Binding", "missing"]]));
        assert!(slice_contains(&out, &[]));
    }
}
