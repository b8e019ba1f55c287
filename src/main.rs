// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Paul <abonnementspaul (at) gmail.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

mod internal;
mod types;
mod utils;

use crate::internal::helpers::prompt_edit;
use crate::internal::launch::{build_config, connect};
use crate::internal::targets::{apply_edit, create, delete, print_targets, update_fields};
use crate::internal::types::{EditOutcome, EditResponse, Selection};
use crate::types::local_settings::LocalSettings;
use crate::utils::logger::init_logging;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum CliAction {
    /// Show stored targets with their numbers
    #[command(alias = "ls")]
    List,
    /// Store a new target
    Add { name: String, address: String },
    /// Replace name and address of a target from a "name,address" string
    Edit {
        number: usize,
        /// Prompted for on stdin when omitted
        value: Option<String>,
    },
    /// Change single fields of a target
    Set {
        number: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Remove a target
    #[command(alias = "rm")]
    Delete { number: usize },
    /// Open the remote application of a target
    #[command(alias = "c")]
    Connect { number: usize },
    /// Print the RDP file that `connect` would use
    Config { number: usize },
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    action: CliAction,

    /// YAML settings file
    #[arg(long, global = true, default_value = "rdpapps.yaml")]
    settings: PathBuf,

    /// Overrides where targets are stored
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Overrides where the generated RDP file is written
    #[arg(long, global = true)]
    rdp_file: Option<PathBuf>,

    /// Remote-desktop client executable
    #[arg(long, global = true)]
    client: Option<String>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_settings(args: &Cli) -> Result<LocalSettings> {
    let mut settings = LocalSettings::load(&args.settings)?;

    if let Some(data_file) = &args.data_file {
        settings.data_file = data_file.clone();
    }
    if let Some(rdp_file) = &args.rdp_file {
        settings.rdp_file = rdp_file.clone();
    }
    if let Some(client) = &args.client {
        settings.client = Some(client.clone());
    }

    settings.check_ok()?;
    tracing::debug!("Settings: {settings:?}");

    Ok(settings)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    tracing::debug!("Args: {args:?}");

    let settings = load_settings(&args)?;
    let mut targets = settings.load_all()?;

    match args.action {
        CliAction::List => print_targets(&targets),
        CliAction::Add { name, address } => {
            create(&settings, &mut targets, &name, &address)?;
            print_targets(&targets);
        }
        CliAction::Edit { number, value } => {
            let selection = Selection(number);
            let response = match value {
                Some(value) => EditResponse::from_answer(&value),
                None => {
                    let index = selection.resolve(targets.len())?;
                    let stdin = std::io::stdin();
                    prompt_edit(&targets[index], &mut stdin.lock(), &mut std::io::stdout())?
                }
            };

            match apply_edit(&settings, &mut targets, selection, response)? {
                EditOutcome::Updated => print_targets(&targets),
                EditOutcome::Unchanged => println!("Nothing changed."),
            }
        }
        CliAction::Set {
            number,
            name,
            address,
        } => {
            update_fields(
                &settings,
                &mut targets,
                Selection(number),
                name.as_deref(),
                address.as_deref(),
            )?;
            print_targets(&targets);
        }
        CliAction::Delete { number } => {
            let removed = delete(&settings, &mut targets, Selection(number))?;
            println!("Deleted {removed}");
        }
        CliAction::Connect { number } => {
            let index = Selection(number).resolve(targets.len())?;
            connect(&settings, &targets[index])
                .context(format!("Failed to connect to {}", targets[index]))?;
        }
        CliAction::Config { number } => {
            let index = Selection(number).resolve(targets.len())?;
            let target = &targets[index];
            print!("{}", build_config(&target.address, &target.name));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit_with_value() {
        let cli = Cli::try_parse_from(["rdpapps", "edit", "2", "Paint,10.0.0.9"]).unwrap();
        match cli.action {
            CliAction::Edit { number, value } => {
                assert_eq!(number, 2);
                assert_eq!(value.as_deref(), Some("Paint,10.0.0.9"));
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rdpapps",
            "connect",
            "1",
            "--client",
            "wlfreerdp3",
            "--data-file",
            "/tmp/targets.json",
            "-vv",
        ])
        .unwrap();

        assert!(matches!(cli.action, CliAction::Connect { number: 1 }));
        assert_eq!(cli.client.as_deref(), Some("wlfreerdp3"));
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/targets.json")));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.settings, PathBuf::from("rdpapps.yaml"));
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::try_parse_from(["rdpapps", "ls"]).unwrap();
        assert!(matches!(cli.action, CliAction::List));
        let cli = Cli::try_parse_from(["rdpapps", "rm", "3"]).unwrap();
        assert!(matches!(cli.action, CliAction::Delete { number: 3 }));
    }

    #[test]
    fn test_flags_override_settings_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings_path = dir.path().join("rdpapps.yaml");
        std::fs::write(&settings_path, "client: from-file\nnotify: false\n").unwrap();
        let data_file = dir.path().join("targets.json");

        let cli = Cli::try_parse_from([
            "rdpapps".to_string(),
            "list".to_string(),
            "--settings".to_string(),
            settings_path.to_string_lossy().to_string(),
            "--data-file".to_string(),
            data_file.to_string_lossy().to_string(),
            "--client".to_string(),
            "from-flag".to_string(),
        ])
        .unwrap();

        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.client_executable(), "from-flag");
        assert_eq!(settings.data_file, data_file);
        assert!(!settings.notify);
    }
}
