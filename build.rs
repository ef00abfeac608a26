//! Build script for the Play Music CLI.
//!
//! Copies the configuration template into the user's configuration directory
//! so a ready-to-edit example sits next to the place the application reads
//! its config from.
//!
//! # File Operations
//!
//! ## Source Location
//! `config.example` in the crate root (where Cargo.toml resides).
//!
//! ## Destination Location
//! - Linux: `~/.config/pmcli/config.example`
//! - macOS: `~/Library/Application Support/pmcli/config.example`
//! - Windows: `%APPDATA%/pmcli/config.example`
//!
//! Nothing here is required to build the crate, so every failure is reported
//! as a cargo warning instead of failing the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=config.example");

    let manifest_dir = std::path::PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("config.example");

    let mut out_dir = dirs::config_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    out_dir.push("pmcli");
    if !template_path.is_file() {
        println!(
            "cargo:warning=config.example not found at {}",
            template_path.display()
        );
        return Ok(());
    }

    let copied = std::fs::create_dir_all(&out_dir)
        .and_then(|_| std::fs::copy(&template_path, out_dir.join("config.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=cannot copy config.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
