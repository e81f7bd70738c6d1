use internport_utils::error::PortalErrorType;
use std::{env::current_dir, process::Command};
use strum::IntoEnumIterator;

/// Checks that every error variant is actually produced somewhere in the
/// workspace, so the taxonomy doesn't accumulate dead entries.
#[test]
#[allow(clippy::unwrap_used)]
fn test_errors_used() {
  let mut unused_error_found = false;
  let mut current_dir = current_dir().unwrap();
  current_dir.pop();
  current_dir.pop();
  for error in PortalErrorType::iter() {
    let search = format!("PortalErrorType::{error}");
    // Unknown is only built by the blanket conversion inside error.rs itself.
    if search == "PortalErrorType::Unknown" {
      continue;
    }
    let mut grep_all = Command::new("grep");
    let grep_all = grep_all
      .current_dir(current_dir.clone())
      .arg("-R")
      .arg("--exclude=error.rs")
      .arg(&search)
      .arg("crates/");
    let output = grep_all.output().unwrap();
    let grep_all_out = std::str::from_utf8(&output.stdout).unwrap();

    if grep_all_out.is_empty() {
      println!("PortalErrorType::{error} is unused");
      unused_error_found = true;
    }
  }
  assert!(!unused_error_found);
}
