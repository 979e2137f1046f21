//! chirp-shell: Interactive menu shell for chirp
//!
//! Drives a [`chirp_engine::Timeline`] from a numbered console menu.

pub mod menu;
pub mod render;
pub mod shell;

pub use menu::{parse_choice, ChoiceInput, MenuChoice, MenuItem, MENU};
pub use render::{render_menu, render_timeline};
pub use shell::{Shell, ShellError, ShellState};

use chirp_engine::Timeline;

/// Run the shell on stdin/stdout until the user exits.
///
/// Returns the timeline as it was left.
pub fn run_interactive(timeline: Timeline) -> Result<Timeline, ShellError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(timeline, stdin.lock(), stdout.lock());
    shell.run()?;
    let (timeline, _) = shell.into_parts();
    Ok(timeline)
}
