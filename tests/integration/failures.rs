// tests/integration/failures.rs
use predicates::prelude::*;

use crate::common::{SCENARIO_METADATA, SCENARIO_TEMPLATE, StampFixture, stamp};

#[test]
fn missing_metadata_fails_without_output() {
    let fx = StampFixture::new();
    let tmpl = fx.write("version.tmpl", SCENARIO_TEMPLATE);

    stamp(&fx.path("absent.txt"), &tmpl, &fx.path("version.h"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));

    assert!(!fx.path("version.h").exists());
}

#[test]
fn missing_template_fails_without_output() {
    let fx = StampFixture::new();
    let meta = fx.write("scratch.txt", SCENARIO_METADATA);

    stamp(&meta, &fx.path("absent.tmpl"), &fx.path("version.h"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.tmpl"));

    assert!(!fx.path("version.h").exists());
}

#[test]
fn missing_output_directory_fails() {
    let fx = StampFixture::new();
    let meta = fx.write("scratch.txt", SCENARIO_METADATA);
    let tmpl = fx.write("version.tmpl", SCENARIO_TEMPLATE);
    let out = fx.path("no-such-dir").join("version.h");

    stamp(&meta, &tmpl, &out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("write output"));

    assert!(!out.exists());
}

#[test]
fn output_that_is_a_directory_fails() {
    let fx = StampFixture::new();
    let meta = fx.write("scratch.txt", SCENARIO_METADATA);
    let tmpl = fx.write("version.tmpl", SCENARIO_TEMPLATE);
    let out = fx.path("version.h");
    std::fs::create_dir(&out).unwrap();
    std::fs::write(out.join("keep"), "k").unwrap();

    stamp(&meta, &tmpl, &out).assert().failure();
}

#[test]
fn failure_diagnostic_lists_each_cause_once() {
    let fx = StampFixture::new();
    let tmpl = fx.write("version.tmpl", SCENARIO_TEMPLATE);
    let out = fx.path("version.h");

    let assert = stamp(&fx.path("absent.txt"), &tmpl, &out).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert_eq!(stderr.matches("Failed to read metadata").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("Failed to read file").count(), 1, "{stderr}");
    assert!(stderr.contains(&format!("could not stamp {}: Failed to read metadata: ", out.display())));
}
