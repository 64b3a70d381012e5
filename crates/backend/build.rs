use std::env;
use std::fs;
use std::path::Path;

/// Files from the workspace root that the gateway reads next to its binary.
const RUNTIME_FILES: [&str; 2] = ["config.toml", "fixtures.json"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR is target/<profile>/build/condo-backend-xxx/out
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    for name in RUNTIME_FILES {
        let source = workspace_root.join(name);
        println!("cargo:rerun-if-changed={}", source.display());

        if source.exists() {
            let dest = target_dir.join(name);
            fs::copy(&source, &dest)
                .unwrap_or_else(|e| panic!("Failed to copy {}: {}", name, e));
        } else if name == "config.toml" {
            println!(
                "cargo:warning=config.toml not found at {:?}, using default config",
                source
            );
        }
    }
}
