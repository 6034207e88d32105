use crate::export::ExportKind;
use std::path::PathBuf;

/// Side effects requested by the handler, carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Persist,
    StartPomodoro,
    StopPomodoro,
    Export { kinds: Vec<ExportKind> },
    LoadImport { path: PathBuf },
    SaveConfig,
    Quit,
}
