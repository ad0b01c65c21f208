//! Layering guardrails for the const core.
//!
//! `nameof_core` is usable from `const` contexts and from the derive crate, so it must stay free of runtime
//! dependencies. This test scans its `Cargo.toml` and fails if anything besides `thiserror` appears in
//! `[dependencies]`.

const ALLOWED: &[&str] = &["thiserror"];

#[test]
fn core_has_no_runtime_dependencies() {
    let manifest = include_str!("../crates/nameof_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        let name = line_no_comment.split(['=', '.']).next().unwrap_or("").trim();
        assert!(
            ALLOWED.contains(&name),
            "`{name}` must not appear in nameof_core [dependencies]; the core only allows {ALLOWED:?}"
        );
    }
}

#[test]
fn core_is_a_path_dependency_of_both_crates() {
    for manifest in [include_str!("../Cargo.toml"), include_str!("../crates/nameof_derive/Cargo.toml")] {
        assert!(
            manifest.lines().any(|line| line.trim_start().starts_with("nameof_core")),
            "nameof_core missing from a manifest"
        );
    }
}
