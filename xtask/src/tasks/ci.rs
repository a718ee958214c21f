use std::process::{Command, ExitStatus};

use owo_colors::OwoColorize;

use crate::{
    project_root,
    tasks::test::{run_integration_test, run_unit_test},
};

pub fn ci() -> Result<(), anyhow::Error> {
    println!("Running `cargo check`...");
    let check = Command::new("cargo")
        .current_dir(project_root())
        .args(["check", "--workspace"])
        .status()?;

    println!("Running `cargo clippy`...");
    let clippy = Command::new("cargo")
        .current_dir(project_root())
        .args(["clippy", "--workspace"])
        .status()?;

    println!("Running `cargo build`...");
    let build = Command::new("cargo")
        .current_dir(project_root())
        .args(["build", "--workspace"])
        .status()?;

    println!("Running unit tests...");
    let unit_test = run_unit_test()?;

    println!("Running integration tests...");
    let integration_test = run_integration_test()?;

    println!("Running `cargo fmt`...");
    let fmt = Command::new("cargo")
        .current_dir(project_root())
        .args(["fmt", "--check"])
        .status()?;

    print_error_with_status_code("cargo check", check);
    print_error_with_status_code("cargo clippy", clippy);
    print_error_with_status_code("cargo build", build);
    print_error_with_status_code("unit tests", unit_test);
    print_error_with_status_code("integration tests", integration_test);
    print_error_with_status_code("cargo fmt", fmt);

    println!("CI checks complete. Consider running `cargo xtask dist` for the wasm release builds.");
    Ok(())
}

fn print_error_with_status_code(task: &str, status: ExitStatus) {
    let code = match status.code() {
        Some(x) => x.to_string(),
        None => "<< no status code >>".to_string(),
    };
    if !status.success() {
        println!(
            "{} `{}` finished with a non-zero status code: {}",
            "Error:".to_string().red(),
            task.blue(),
            code
        );
    }
}
