use std::env;
use std::fs;
use std::path::Path;

/// Files copied from the workspace root next to the built binary
const RUNTIME_FILES: &[&str] = &["config.toml", "site_policies.csv"];

fn main() {
    for file in RUNTIME_FILES {
        println!("cargo:rerun-if-changed=../../{}", file);
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap(); // "debug" or "release"

    // OUT_DIR is typically: target/debug/build/backend-xxx/out
    // We need to go to: target/debug or target/release
    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    for file in RUNTIME_FILES {
        let source = workspace_root.join(file);
        let dest = target_dir.join(file);

        if source.exists() {
            fs::copy(&source, &dest)
                .unwrap_or_else(|e| panic!("Failed to copy {}: {}", file, e));
        } else {
            println!(
                "cargo:warning={} not found at {:?}, using defaults",
                file, source
            );
        }
    }
}
