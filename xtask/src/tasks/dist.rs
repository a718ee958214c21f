use std::process::{Command, ExitStatus};

use crate::{check_trunk_exists, check_wasm_pack_exists, project_root};

/// Release wasm builds of both deliverables: the login page through
/// trunk, the service worker through wasm-pack.
pub fn dist() -> Result<(), anyhow::Error> {
    println!("Building the login page...");
    build_login()?;
    println!("Building the service worker...");
    build_worker()?;
    Ok(())
}

pub fn build_login() -> Result<ExitStatus, anyhow::Error> {
    if check_trunk_exists().is_err() {
        anyhow::bail!("Unable to build the login page. trunk is not available.");
    }
    let build = Command::new("trunk")
        .current_dir(project_root().join("services").join("caisses-login"))
        .args(["build", "--release"])
        .status()?;
    Ok(build)
}

pub fn build_worker() -> Result<ExitStatus, anyhow::Error> {
    if check_wasm_pack_exists().is_err() {
        anyhow::bail!("Unable to build the service worker. wasm-pack is not available.");
    }
    // no-modules keeps the bundle loadable with importScripts, which is
    // what a service worker scope offers.
    let build = Command::new("wasm-pack")
        .current_dir(project_root().join("services").join("caisses-sw"))
        .args(["build", "--release", "--target", "no-modules"])
        .status()?;
    Ok(build)
}
