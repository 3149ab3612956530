//! Generate `config.toml` and `config.schema.json` into the workspace `demos/` directory.
//!
//! Run with: cargo run -p wtf-core --example generate_config

use std::path::PathBuf;

use anyhow::anyhow;
use wtf_core::{APP_NAME, write_generated_files};

/// Repository URL for schema $id.
const REPO_URL: &str = "https://github.com/wtfutil/wtf-rs";

fn main() -> anyhow::Result<()> {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = crate_root
        .parent() // crates/
        .and_then(|p| p.parent())
        .ok_or_else(|| anyhow!("could not find workspace root"))?;

    let demos_dir = workspace_root.join("demos");

    println!("Generating config files to {}...", demos_dir.display());
    write_generated_files(&demos_dir, APP_NAME, REPO_URL)?;
    println!("Done! Generated:");
    println!("  - {}/config.schema.json", demos_dir.display());
    println!("  - {}/config.toml", demos_dir.display());

    Ok(())
}
