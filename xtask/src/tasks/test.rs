use std::process::{Command, ExitStatus};

use crate::project_root;

pub fn xtest() -> Result<(), anyhow::Error> {
    println!("Running unit tests...");
    run_unit_test()?;
    println!("Running integration tests...");
    run_integration_test()?;
    Ok(())
}

pub fn run_unit_test() -> Result<ExitStatus, anyhow::Error> {
    let test = Command::new("cargo")
        .current_dir(project_root())
        .args(["test", "--workspace", "--lib", "--bins"])
        .status()?;
    Ok(test)
}

pub fn run_integration_test() -> Result<ExitStatus, anyhow::Error> {
    let login = Command::new("cargo")
        .current_dir(project_root())
        .args(["test", "-p", "caisses-login", "--test", "login_flow"])
        .status()?;
    if !login.success() {
        return Ok(login);
    }
    let offline = Command::new("cargo")
        .current_dir(project_root())
        .args(["test", "-p", "caisses-sw", "--test", "offline"])
        .status()?;
    Ok(offline)
}
