use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the workspace `config.toml` next to the backend binary.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR looks like target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let workspace_root: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let source = workspace_root.join("config.toml");

    if !source.exists() {
        println!("cargo:warning=config.toml not found at {:?}, embedded defaults apply", source);
        return;
    }
    match fs::copy(&source, target_dir.join("config.toml")) {
        Ok(_) => {}
        Err(e) => println!("cargo:warning=failed to copy config.toml: {}", e),
    }
}
