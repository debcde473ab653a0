use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::core::errors::CliError;
use crate::core::utils::PathResolver;

use super::context::{CliMode, LoopControl, ShellContext};
use super::output;

/// Environment variable switching the shell to line-by-line stdin input.
pub const SCRIPT_ENV: &str = "DONATION_CORE_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    tracing::debug!(?mode, "shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));

    let history = PathResolver::history_file_in(context.store().base_dir());
    if editor.load_history(&history).is_err() {
        tracing::debug!(path = %history.display(), "no shell history yet");
    }

    output::info("Type `help` for a list of commands.");
    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Err(err) = editor.save_history(&history) {
        tracing::warn!(path = %history.display(), "failed to save shell history: {err}");
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match handle_line(context, trimmed) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    let tokens = parse_command_line(line)?;
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.last_command = Some(line.to_string());

    let control = context.dispatch(&command, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, CliError> {
    split(input).map_err(|err| CliError::Input(err.to_string()))
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        Self { commands }
    }

    fn candidates(&self, needle: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|name| name.starts_with(needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let trimmed = prefix.trim_start();
        // Only the command word completes; arguments are free-form.
        if trimmed.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - trimmed.len();
        Ok((start, self.candidates(&trimmed.to_ascii_lowercase())))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}
