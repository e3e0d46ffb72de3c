//! Sudoers secure_path editing.
//!
//! `/etc/sudoers` holds access-control policy, and a malformed rewrite can
//! break `sudo` for the whole system. The line edit is therefore a pure
//! function over the file contents, unit-testable without a terminal, and
//! the effectful step only ever writes the exact contents the plan produced,
//! after the operator confirms a before/after diff of the one changed line.
//!
//! States: Scanning → (NoMatch → Skip) | (Match → AlreadyPresent → Done) |
//! (Match → NeedsChange → AwaitConfirmation → (Confirmed → Rewrite → Done) |
//! (Declined → Done)).

use regex::Regex;

use crate::config::InstallConfig;
use crate::error::Result;
use crate::sys;
use crate::ui::UserInterface;

/// Outcome of editing a single sudoers line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// The line is not a `Defaults secure_path` directive.
    NotSecurePath,
    /// The directory is already a member of the list.
    AlreadyPresent,
    /// The line with the directory appended inside the original quotes.
    Updated { after: String },
}

/// Planned change for the whole sudoers file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// No `Defaults secure_path` line exists; nothing to do.
    NoSecurePathLine,
    /// The directory is already on the secure path.
    AlreadyPresent,
    /// Rewrite the file, changing exactly one line.
    Update {
        /// 1-based line number of the changed line.
        line_no: usize,
        before: String,
        after: String,
        /// The full file with only that line replaced.
        new_contents: String,
    },
}

fn secure_path_re() -> Regex {
    Regex::new(r#"^(Defaults\s+secure_path=")([^"]*)(".*)$"#).expect("valid regex")
}

/// Append `dir` to a single `Defaults secure_path` line.
///
/// Pure: quoting and any text outside the quotes are preserved verbatim, and
/// membership is checked against the parsed colon-delimited list, not by
/// substring search.
pub fn rewrite_line(line: &str, dir: &str) -> LineEdit {
    let re = secure_path_re();
    let Some(caps) = re.captures(line) else {
        return LineEdit::NotSecurePath;
    };

    let list = &caps[2];
    if list.split(':').any(|entry| entry == dir) {
        return LineEdit::AlreadyPresent;
    }

    LineEdit::Updated {
        after: format!("{}{}:{}{}", &caps[1], list, dir, &caps[3]),
    }
}

/// Scan the whole file and compute the rewrite, if any.
///
/// Only the first matching line is considered. Every other line, and the
/// file's trailing-newline shape, is carried into `new_contents` verbatim.
pub fn plan_update(contents: &str, dir: &str) -> Plan {
    let lines: Vec<&str> = contents.split('\n').collect();

    for (idx, line) in lines.iter().enumerate() {
        match rewrite_line(line, dir) {
            LineEdit::NotSecurePath => continue,
            LineEdit::AlreadyPresent => return Plan::AlreadyPresent,
            LineEdit::Updated { after } => {
                let mut new_lines: Vec<&str> = lines.clone();
                new_lines[idx] = &after;
                let new_contents = new_lines.join("\n");
                return Plan::Update {
                    line_no: idx + 1,
                    before: line.to_string(),
                    after: after.clone(),
                    new_contents,
                };
            }
        }
    }

    Plan::NoSecurePathLine
}

/// Append the Go binary directory to the sudoers secure_path.
///
/// Skipped entirely when `sudo` is not resolvable on PATH.
pub fn configure(config: &InstallConfig, ui: &mut dyn UserInterface) -> Result<()> {
    if !sys::command_on_path("sudo") {
        tracing::debug!("sudo not found on PATH; skipping secure_path update");
        return Ok(());
    }
    update_sudoers(config, ui)
}

/// Plan and, after confirmation, apply the secure_path change.
///
/// A missing secure_path line and a declined confirmation both leave the
/// file byte-for-byte untouched and are not errors.
pub fn update_sudoers(config: &InstallConfig, ui: &mut dyn UserInterface) -> Result<()> {
    let dir = config.bin_dir().display().to_string();
    let contents = std::fs::read_to_string(&config.sudoers_path)?;

    match plan_update(&contents, &dir) {
        Plan::NoSecurePathLine => {
            ui.message(&format!(
                "No secure_path line found in {}; skipping",
                config.sudoers_path.display()
            ));
            Ok(())
        }
        Plan::AlreadyPresent => {
            ui.message(&format!("{} is already on the sudo secure_path", dir));
            Ok(())
        }
        Plan::Update {
            line_no,
            before,
            after,
            new_contents,
        } => {
            ui.message(&format!(
                "Will modify line {} of {}:",
                line_no,
                config.sudoers_path.display()
            ));
            ui.message(&format!("Before: {}", before));
            ui.message(&format!("After:  {}", after));

            if ui.confirm("Apply this change?", false)? {
                std::fs::write(&config.sudoers_path, new_contents)?;
                ui.success("Updated sudo secure_path");
            } else {
                ui.message("Leaving sudoers unchanged");
            }
            Ok(())
        }
    }
}
