use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A scenario written to a temporary directory that lives as long as this value.
pub struct TempScenario {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn write_scenario(contents: &str) -> TempScenario {
    write_file("scenario.toml", contents)
}

pub fn write_file(name: &str, contents: &str) -> TempScenario {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    TempScenario { _dir: dir, path }
}

pub const LUNCH: &str = r#"
[[people]]
name = "John"
currency = "EUR"
balance = "100"

[[people]]
name = "Jane"
currency = "EUR"

[[people]]
name = "Jack"
currency = "EUR"

[[people]]
name = "Bob"
currency = "USD"
balance = "20"

[[products]]
name = "Bread"
kind = "food"
prices = { EUR = "2.50", USD = "-1" }

[[products]]
name = "Laptop"
kind = "tech"
prices = { USD = "899.99" }

[[steps]]
action = "divide"
from = "John"
among = ["Jane", "Jack", "Bob"]

[[steps]]
action = "buy"
buyer = "Jane"
product = "Bread"

[[steps]]
action = "transfer"
from = "Jack"
to = "Jane"
amount = "10"
"#;
