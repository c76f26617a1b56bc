use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

fn rel(path: &Path) -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let rel = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();
    rel.replace('\\', "/")
}

#[test]
fn process_spawning_is_confined_to_the_executor() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        let rel_path = rel(&file);
        if rel_path == "src/exec.rs" {
            continue;
        }
        if content.contains("std::process::Command") || content.contains("process::Command") {
            violations.push(format!(
                "{rel_path} spawns processes outside the Command Executor boundary"
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Executor boundary violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn sysinfo_is_confined_to_the_telemetry_module() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        let rel_path = rel(&file);
        if rel_path.starts_with("src/telemetry/") {
            continue;
        }
        if content.contains("sysinfo::") {
            violations.push(format!(
                "{rel_path} reads host metrics directly instead of via telemetry"
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Telemetry boundary violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn menu_session_and_tui_variant_stay_independent() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        let rel_path = rel(&file);

        let menu_side = rel_path.starts_with("src/screens/") || rel_path == "src/session.rs";
        if menu_side && content.contains("crate::tui") {
            violations.push(format!("{rel_path} imports the full-screen variant"));
        }

        let tui_side = rel_path.starts_with("src/tui/");
        if tui_side && (content.contains("crate::screens") || content.contains("crate::console")) {
            violations.push(format!("{rel_path} imports the menu-session presentation"));
        }
    }

    assert!(
        violations.is_empty(),
        "Variant isolation violations:\n{}",
        violations.join("\n")
    );
}
