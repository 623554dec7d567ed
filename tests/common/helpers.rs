#![allow(dead_code)]

//! Helper functions for common test assertions

/// How close `value` is to `expected`, from 1.0 (equal) downwards.
pub fn accuracy(value: f64, expected: f64) -> f64 {
    1.0 - (1.0 - value / expected).abs()
}

pub fn assert_near(value: f64, expected: f64, min_accuracy: f64, context: &str) {
    let actual = accuracy(value, expected);
    assert!(
        actual >= min_accuracy,
        "{}: {} should be near {} by {}%, got {:.2}%",
        context,
        value,
        expected,
        100.0 * min_accuracy,
        100.0 * actual
    );
}

pub fn markup(visible: &str, invisible: Option<&str>) -> String {
    match invisible {
        Some(rest) => format!(
            r#"<span class="truncated"><span class="truncated-visible">{visible}<span class="truncated-ellipsis"></span></span><span class="truncated-invisible">{rest}</span></span>"#
        ),
        None => format!(
            r#"<span class="truncated"><span class="truncated-visible">{visible}</span></span>"#
        ),
    }
}
