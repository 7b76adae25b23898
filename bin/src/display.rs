//! Candidate presentation and selection.

use anyhow::{Context, Result, bail};
use cdfetch_lib::prelude::*;
use inquire::Select;
use std::path::{Path, PathBuf};

/// Prompt label for the driver picker.
const SELECT_LABEL: &str = "Select Chrome Driver";

/// Picks one candidate: the first (newest) when `assume_yes` is set,
/// otherwise through an interactive prompt.
pub(crate) fn select_candidate(
    candidates: Vec<DriverCandidate>,
    assume_yes: bool,
) -> Result<DriverCandidate> {
    if candidates.is_empty() {
        bail!("No drivers to choose from");
    }

    if assume_yes {
        return candidates
            .into_iter()
            .next()
            .context("No drivers to choose from");
    }

    Select::new(SELECT_LABEL, candidates)
        .with_page_size(15)
        .prompt()
        .context("Driver selection cancelled")
}

/// Returns where a candidate is saved when no output path is given.
pub(crate) fn default_output(output_dir: Option<&Path>, candidate: &DriverCandidate) -> PathBuf {
    output_dir
        .unwrap_or_else(|| Path::new("."))
        .join(candidate.file_name())
}

/// Prints candidates as a table.
pub(crate) fn print_candidates(candidates: &[DriverCandidate]) {
    println!("{:<20} {:<30}", "VERSION", "FILE");
    println!("{}", "-".repeat(50));

    for candidate in candidates {
        println!("{:<20} {:<30}", candidate.version(), candidate.file_name());
    }

    println!("\nTotal: {} drivers", candidates.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<DriverCandidate> {
        vec![
            DriverCandidate::new("115.0.5790.170/chromedriver_mac64.zip", "https://dl/new"),
            DriverCandidate::new("115.0.5790.102/chromedriver_mac64.zip", "https://dl/old"),
        ]
    }

    #[test]
    fn test_select_with_yes_takes_first() {
        let chosen = select_candidate(candidates(), true).unwrap();
        assert_eq!(chosen.url, "https://dl/new");
    }

    #[test]
    fn test_select_empty_fails() {
        assert!(select_candidate(Vec::new(), true).is_err());
        assert!(select_candidate(Vec::new(), false).is_err());
    }

    #[test]
    fn test_default_output() {
        let c = &candidates()[0];
        assert_eq!(
            default_output(None, c),
            PathBuf::from("./chromedriver_mac64.zip")
        );
        assert_eq!(
            default_output(Some(Path::new("/opt/drivers")), c),
            PathBuf::from("/opt/drivers/chromedriver_mac64.zip")
        );
    }
}
