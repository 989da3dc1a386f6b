use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};

fn write_corpus0(dir: &Path) {
    let pages = [
        ("1.html", &["2.html"][..]),
        ("2.html", &["1.html", "3.html"][..]),
        ("3.html", &["2.html", "4.html"][..]),
        ("4.html", &["2.html"][..]),
    ];
    for (name, links) in pages {
        let body: String = links
            .iter()
            .map(|l| format!("<a href=\"{l}\">{l}</a>\n"))
            .collect();
        fs::write(dir.join(name), format!("<html><body>\n{body}</body></html>\n")).unwrap();
    }
}

#[test]
fn ranks_both_ways() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus0(dir.path());

    Command::cargo_bin("surfer-rank")
        .unwrap()
        .arg(dir.path())
        .args(["--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PageRank Results from Sampling (n = 10000)\n  1.html: ",
        ))
        .stdout(predicate::str::ends_with(
            "PageRank Results from Iteration\n  \
             1.html: 0.2198\n  \
             2.html: 0.4294\n  \
             3.html: 0.2198\n  \
             4.html: 0.1311\n",
        ));
}

#[test]
fn seeded_runs_match() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus0(dir.path());

    let run = || {
        Command::cargo_bin("surfer-rank")
            .unwrap()
            .arg(dir.path())
            .args(["--seed", "42", "-n", "500"])
            .output()
            .unwrap()
    };
    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn debug_log_shows_estimator_details() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus0(dir.path());

    Command::cargo_bin("surfer-rank")
        .unwrap()
        .env("RUST_LOG", "surfer_rank=debug")
        .arg(dir.path())
        .args(["--seed", "7", "-n", "300"])
        .assert()
        .success()
        .stderr(predicate::str::contains("samples: 300"))
        .stderr(predicate::str::contains("rounds: "));
}

#[test]
fn rejects_bad_damping() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus0(dir.path());

    Command::cargo_bin("surfer-rank")
        .unwrap()
        .arg(dir.path())
        .args(["--damping", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("damping factor must be in (0, 1)"));
}

#[test]
fn rejects_empty_corpus() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("surfer-rank")
        .unwrap()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("corpus has no pages"));
}

#[test]
fn rejects_missing_directory() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("surfer-rank")
        .unwrap()
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("crawling"));
}
