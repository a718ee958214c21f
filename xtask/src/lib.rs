use std::path::PathBuf;
use std::process::Command;

pub mod tasks;

pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask sits one level under the project root")
        .to_path_buf()
}

pub fn check_trunk_exists() -> Result<(), anyhow::Error> {
    check_tool_exists("trunk")
}

pub fn check_wasm_pack_exists() -> Result<(), anyhow::Error> {
    check_tool_exists("wasm-pack")
}

fn check_tool_exists(tool: &str) -> Result<(), anyhow::Error> {
    match Command::new(tool).arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        _ => anyhow::bail!("{tool} is not available"),
    }
}
