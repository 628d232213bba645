#[cfg(feature = "colors")]
use colored::{ColoredString, Colorize};

use crate::common::format::{format_bytes, format_path_label};
use crate::engine::{error::ScaffoldError, model::ScaffoldReport, scaffold::Milestone};

/// Prints a progress line for one step of the run.
pub fn print_milestone(m: &Milestone<'_>) {
    match m {
        Milestone::CreatingTarget(path) => {
            println!("📁 Creating project in {}", path.display());
        }
        Milestone::CopyingTemplate(path) => {
            println!("📋 Copying template from {}", path.display());
        }
        Milestone::Installing => println!("📦 Installing dependencies..."),
    }
}

pub fn print_success(report: &ScaffoldReport) {
    println!("{}", highlight("✅ Project created successfully!"));
    print_summary(report);
}

pub fn print_summary(report: &ScaffoldReport) {
    let line = "=".repeat(40);
    println!(
        "\n{line}\n📂 Project: {} ({})\n📄 Files copied: {}\n🗂  Directories created: {}\n💾 Bytes written: {}\n{line}",
        format_path_label(&report.target),
        report.target.display(),
        report.copied.files(),
        report.copied.directories(),
        format_bytes(report.copied.total_bytes()),
    );
}

/// Prints an error with a prefix naming its class. Errors that did not come
/// from the scaffold pipeline are shown as plain errors.
pub fn print_error(err: &anyhow::Error) {
    let label = err
        .downcast_ref::<ScaffoldError>()
        .map(ScaffoldError::category)
        .unwrap_or("error");
    eprintln!("{} {err:#}", alert(&format!("❌ [{label}]")));
}

#[cfg(feature = "colors")]
fn highlight<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().green().bold()
}
#[cfg(not(feature = "colors"))]
fn highlight<S: AsRef<str>>(s: S) -> String {
    s.as_ref().into()
}

#[cfg(feature = "colors")]
fn alert<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().red().bold()
}
#[cfg(not(feature = "colors"))]
fn alert<S: AsRef<str>>(s: S) -> String {
    s.as_ref().into()
}
