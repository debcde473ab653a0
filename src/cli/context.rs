use std::path::Path;

use crate::config::{Config, ConfigManager};
use crate::core::errors::{CliError, DonationError};
use crate::core::services::ReportService;
use crate::domain::DonationLedger;
use crate::storage::{canonical_name, load_snapshot_from_path, JsonSnapshotStore, SnapshotStorage};

use super::commands;
use super::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Mutable state shared by every command of one shell session.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub last_command: Option<String>,
    config_manager: ConfigManager,
    config: Config,
    store: JsonSnapshotStore,
    ledger: Option<DonationLedger>,
    source: Option<String>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let store = JsonSnapshotStore::new(config.data_root.clone())?;
        output::set_color_enabled(config.ui_color_enabled && mode == CliMode::Interactive);

        let mut context = Self {
            mode,
            running: true,
            last_command: None,
            config_manager,
            config,
            store,
            ledger: None,
            source: None,
        };
        if mode == CliMode::Interactive {
            context.reopen_last_snapshot();
        }
        Ok(context)
    }

    fn reopen_last_snapshot(&mut self) {
        let Some(name) = self.config.last_snapshot.clone() else {
            return;
        };
        match self.store.load_snapshot(&name) {
            Ok(ledger) => {
                output::info(format!("Reopened snapshot `{name}`."));
                self.set_ledger(ledger, name);
            }
            Err(err) => {
                tracing::warn!(snapshot = %name, "could not reopen last snapshot: {err}");
            }
        }
    }

    pub fn prompt(&self) -> String {
        match &self.source {
            Some(name) => format!("donations[{name}]> "),
            None => "donations> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        commands::COMMANDS.iter().map(|entry| entry.name).collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CliError> {
        match command {
            "exit" | "quit" => return Ok(LoopControl::Exit),
            "help" => commands::help(args),
            "load" => commands::load(self, args),
            "save" => commands::save(self, args),
            "snapshots" => commands::snapshots(self),
            "inventory" => commands::inventory(self, args),
            "donors" => commands::donors(self, args),
            "stats" => commands::stats(self, args),
            "balance" => commands::balance(self, args),
            "warnings" => commands::warnings(self),
            "config" => commands::config(self, args),
            "version" => commands::version(),
            other => Err(CliError::Input(format!(
                "unknown command `{other}`, type `help` for a list"
            ))),
        }?;
        Ok(LoopControl::Continue)
    }

    pub fn report_error(&self, err: CliError) {
        tracing::debug!(command = ?self.last_command, "command failed: {err}");
        output::error(err);
    }

    pub fn ledger(&self) -> Option<&DonationLedger> {
        self.ledger.as_ref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn set_ledger(&mut self, ledger: DonationLedger, source: impl Into<String>) {
        self.ledger = Some(ledger);
        self.source = Some(source.into());
    }

    pub fn store(&self) -> &JsonSnapshotStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Applies `update` to the configuration and writes it back to disk.
    pub fn update_config<F>(&mut self, update: F) -> Result<(), CliError>
    where
        F: FnOnce(&mut Config) -> crate::core::Result<()>,
    {
        update(&mut self.config)?;
        self.config_manager.save(&self.config)?;
        output::set_color_enabled(self.config.ui_color_enabled && self.mode == CliMode::Interactive);
        Ok(())
    }

    /// Loads a snapshot either from a file path or by its stored name.
    pub(crate) fn open(&mut self, target: &str) -> Result<String, CliError> {
        let path = Path::new(target);
        if path.is_file() {
            let ledger = load_snapshot_from_path(path)?;
            let label = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(target)
                .to_string();
            self.set_ledger(ledger, label.clone());
            return Ok(label);
        }
        let ledger = self.store.load_snapshot(target)?;
        let name = canonical_name(target);
        self.set_ledger(ledger, name.clone());
        let remembered = name.clone();
        self.update_config(|config| {
            config.last_snapshot = Some(remembered);
            Ok(())
        })?;
        Ok(name)
    }

    pub(crate) fn reports(&self) -> Result<ReportService<&DonationLedger>, CliError> {
        let ledger = self.ledger.as_ref().ok_or(DonationError::SnapshotNotLoaded)?;
        Ok(ReportService::new(ledger).with_default_window(self.config.default_window_days))
    }
}
