#![allow(dead_code)]

use std::path::PathBuf;

pub mod helpers;

/// Get path to a fixture file
pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file)
}

/// 500 words of lorem ipsum (3,432 characters, no newlines)
pub fn lipsum() -> String {
    let path = fixture_path("lipsum.txt");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
        .trim_end()
        .to_string()
}

/// English letter frequencies per 10,000 letters, a through z.
///
/// See <http://en.wikipedia.org/wiki/Letter_frequency>
pub const LETTER_FREQUENCIES: [usize; 26] = [
    1160, 470, 351, 267, 201, 378, 195, 723, 629, 60, 59, 271, 437, 237, 626, 255, 17, 165, 776,
    1667, 149, 65, 675, 2, 162, 3,
];

/// Each letter repeated by its frequency: "aaa...bbb...zzz"
pub fn frequency_letters() -> String {
    LETTER_FREQUENCIES
        .iter()
        .zip('a'..='z')
        .map(|(&count, letter)| letter.to_string().repeat(count))
        .collect()
}

pub const SAMPLE: &str = "Forsaking monastic tradition, twelve jovial friars gave up their vocation for a questionable existence on the flying trapeze.";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
