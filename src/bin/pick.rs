/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{io::{stdin, BufRead},
          process::Command};

use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use miette::IntoDiagnostic;
use pickify::{is_stdin_piped,
              is_stdout_piped,
              select_many_from_list,
              select_one_from_list,
              Item,
              SelectionMode,
              StdinIsPipedResult,
              StdoutIsPipedResult,
              StyleSheet};
use tracing_subscriber::EnvFilter;
use StdinIsPipedResult::*;
use StdoutIsPipedResult::*;

const SELECTED_ITEM_SYMBOL: char = '%';

#[derive(Debug, Parser)]
#[command(bin_name = "pick")]
#[command(about = "Pick one or more items from a list piped in via stdin 👉", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
struct CliArgs {
    /// Show the list UI in single or multiple selection mode
    #[arg(value_name = "mode", long, short = 's')]
    selection_mode: SelectionMode,

    /// Each selected item is passed to this command as `%` and executed in your shell.
    /// For eg: "echo %". Please wrap the command in quotes 💡
    #[arg(value_name = "command", long, short = 'c')]
    command_to_run_with_selection: Option<String>,

    /// Keep the list open until at least one item is toggled (multiple mode only)
    #[arg(long, short = 'r')]
    require_selection: bool,

    /// Parse stdin as a JSON array of {"label": ..., "id": ...} objects instead of one
    /// item per line
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() -> miette::Result<()> {
    init_tracing();

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CliArgs` struct.
    let cli_args = CliArgs::parse();
    tracing::debug!(?cli_args, "parsed command line");

    let bin_name = CliArgs::command();
    let bin_name = bin_name.get_bin_name().unwrap_or("this command");

    // macos has issues w/ stdin piped in.
    // https://github.com/crossterm-rs/crossterm/issues/396
    if cfg!(target_os = "macos") {
        match (is_stdin_piped(), is_stdout_piped()) {
            (StdinIsPiped, _) => {
                show_error_stdin_pipe_does_not_work_on_macos();
            }
            (_, StdoutIsPiped) => {
                show_error_do_not_pipe_stdout(bin_name);
            }
            (StdinIsNotPiped, StdoutIsNotPiped) => {
                print_help()?;
            }
        }
    }
    // Linux works fine.
    else {
        match (is_stdin_piped(), is_stdout_piped()) {
            (StdinIsPiped, StdoutIsNotPiped) => {
                show_tui(cli_args)?;
            }
            (StdinIsPiped, StdoutIsPiped) => {
                show_error_do_not_pipe_stdout(bin_name);
            }
            (StdinIsNotPiped, StdoutIsPiped) => {
                show_error_need_to_pipe_stdin(bin_name);
                show_error_do_not_pipe_stdout(bin_name);
            }
            (StdinIsNotPiped, StdoutIsNotPiped) => {
                show_error_need_to_pipe_stdin(bin_name);
            }
        }
    }

    Ok(())
}

/// Logs are opt-in via the `PICK_LOG` env var (eg: `PICK_LOG=debug`) and go to stderr
/// so they never land inside the list frame on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("PICK_LOG"))
        .with_writer(std::io::stderr)
        .init();
}

fn show_error_stdin_pipe_does_not_work_on_macos() {
    let msg = "Unfortunately at this time macOS `stdin` pipe does not work on macOS.\
                     \nhttps://github.com/crossterm-rs/crossterm/issues/396"
        .blue()
        .to_string();
    println!("{msg}");
}

fn show_error_need_to_pipe_stdin(bin_name: &str) {
    let msg = format!(
        "Please pipe the output of another command into {bin_name}. \
         \n✅ For example: `ls -1 | {bin_name} -s single`",
    )
    .green()
    .to_string();
    println!("{msg}");
}

fn show_error_do_not_pipe_stdout(bin_name: &str) {
    let msg = format!(
        "Please do *not* pipe the output of {bin_name} to another command. \
         \n❎ For eg, don't do this: `ls -1 | {bin_name} -s single | cat`",
    )
    .red()
    .to_string();
    println!("{msg}");
}

fn show_tui(cli_args: CliArgs) -> miette::Result<()> {
    let items = read_items_from_stdin(cli_args.json)?;
    tracing::debug!(item_count = items.len(), "read items from stdin");

    // Early return, nothing to do. No content found in stdin.
    if items.is_empty() {
        return Ok(());
    }

    // Actually get input from the user.
    let selected_ids = match cli_args.selection_mode {
        SelectionMode::Single => {
            vec![select_one_from_list(items, StyleSheet::default()).into_diagnostic()?]
        }
        SelectionMode::Multiple => select_many_from_list(
            items,
            cli_args.require_selection,
            StyleSheet::default(),
        )
        .into_diagnostic()?,
    };
    tracing::debug!(?selected_ids, "user confirmed selection");

    match &cli_args.command_to_run_with_selection {
        Some(command_template) => {
            for selected_id in &selected_ids {
                let actual_command_to_run =
                    command_template.replace(SELECTED_ITEM_SYMBOL, selected_id);
                execute_command(&actual_command_to_run)?;
            }
        }
        None => {
            for selected_id in &selected_ids {
                println!("{selected_id}");
            }
        }
    }

    Ok(())
}

fn read_items_from_stdin(json: bool) -> miette::Result<Vec<Item>> {
    if json {
        let items: Vec<Item> =
            serde_json::from_reader(stdin().lock()).into_diagnostic()?;
        Ok(items)
    } else {
        let lines = stdin()
            .lock()
            .lines()
            .map_while(Result::ok)
            .collect::<Vec<String>>();
        Ok(lines.iter().map(|line| Item::from(line.as_str())).collect())
    }
}

fn execute_command(cmd_str: &str) -> miette::Result<()> {
    // This let binding is required to make the code below work.
    let mut command = if cfg!(target_os = "windows") {
        Command::new("cmd")
    } else {
        Command::new("sh")
    };

    let command = if cfg!(target_os = "windows") {
        command.arg("/C").arg(cmd_str)
    } else {
        command.arg("-c").arg(cmd_str)
    };

    let output = command.output().into_diagnostic()?;
    print!("{}", String::from_utf8_lossy(&output.stdout));

    Ok(())
}

/// Programmatically prints out help.
fn print_help() -> miette::Result<()> {
    let mut cmd = CliArgs::command();
    cmd.print_help().into_diagnostic()?;
    Ok(())
}
