use std::io::IsTerminal;
use std::sync::OnceLock;

use soonami_config::DisplayFormat;

use crate::cli::Cli;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(cli: &Cli, format: DisplayFormat) {
    let is_tty = std::io::stderr().is_terminal();
    let progress = is_tty && !cli.quiet && !cli.no_progress && format != DisplayFormat::Json;

    let _ = UI_PREFS.set(UiPrefs { progress });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
