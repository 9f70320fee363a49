//! Screen a few submissions against an in-memory history.
//!
//! ```text
//! cargo run --example check_demo
//! cargo run --example check_demo -- path/to/plagcheck.yaml
//! RUST_LOG=debug cargo run --example check_demo
//! ```

use std::env;

use plagcheck::{InMemoryCorpus, PlagcheckConfig, ReviewStatus, review_submission};

const YAML: &str = r#"
version: "1.0"
name: "demo"
matcher:
  threshold: 0.85
  min_length: 20
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .json()
        .init();

    let config = match env::args().nth(1) {
        Some(path) => PlagcheckConfig::from_file(path)?,
        None => PlagcheckConfig::from_yaml(YAML)?,
    };

    let mut history = InMemoryCorpus::new();
    history.insert(
        "two-sum",
        "alice",
        "def solve(a, b):\n    # add them\n    return a + b\n",
    );
    history.insert(
        "two-sum",
        "bob",
        "import sys\nprint(sum(map(int, sys.stdin.read().split())))\n",
    );

    let submissions = [
        ("carol", "def solve(a,b):\n  return a+b"),
        ("dave", "def solve(x, y):\n    result = x\n    result += y\n    return result\n"),
        ("erin", "print(1)"),
    ];

    for (author, code) in submissions {
        let outcome = review_submission(&config, code, "two-sum", author, &history)?;
        match outcome.status {
            ReviewStatus::Rejected => println!(
                "{author}: rejected ({})",
                outcome.feedback.as_deref().unwrap_or_default()
            ),
            ReviewStatus::Pending => println!("{author}: sent to grading"),
        }
        history.insert("two-sum", author, code);
    }

    Ok(())
}
