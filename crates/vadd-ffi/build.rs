//! Writes `include/vadd.h` declaring the four harness hooks.

use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let header = crate_dir.join("include").join("vadd.h");

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))?;
    if let Some(dir) = header.parent() {
        std::fs::create_dir_all(dir)?;
    }
    cbindgen::generate_with_config(&crate_dir, config)?.write_to_file(&header);
    Ok(())
}
