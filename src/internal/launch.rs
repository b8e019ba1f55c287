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

use crate::types::local_settings::LocalSettings;
use crate::types::remote_target::RemoteTarget;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Child, Command};

/// Line separator of .rdp files as written by mstsc itself.
const RDP_LINE_ENDING: &str = "\r\n";

/// Builds the RemoteApp connection file for `app_name` on `address`.
///
/// Values are embedded as typed. The `key:type:value` format has no escape
/// sequence, so a line break inside a value ends that setting early.
pub fn build_config(address: &str, app_name: &str) -> String {
    if [address, app_name]
        .iter()
        .any(|value| value.contains(['\r', '\n']))
    {
        tracing::warn!(
            "Line break in address or application name, the generated settings may be wrong"
        );
    }

    let lines = [
        format!("alternate full address:s:{address}"),
        "alternate shell:s:rdpinit.exe".to_string(),
        format!("full address:s:{address}"),
        "remoteapplicationmode:i:1".to_string(),
        format!("remoteapplicationname:s:{app_name}"),
        format!("remoteapplicationprogram:s:||{app_name}"),
        "disableremoteappcapscheck:i:1".to_string(),
        "drivestoredirect:s:*".to_string(),
        "prompt for credentials:i:1".to_string(),
        "promptcredentialonce:i:0".to_string(),
        "redirectcomports:i:1".to_string(),
        "span monitors:i:1".to_string(),
        "use multimon:i:1".to_string(),
    ];

    let mut config = lines.join(RDP_LINE_ENDING);
    config.push_str(RDP_LINE_ENDING);
    config
}

fn spawn_client(client: &str, rdp_file: &Path) -> Result<Child> {
    tracing::info!("Launching {client} with {}", rdp_file.display());

    Command::new(client)
        .arg(rdp_file)
        .spawn()
        .context(format!("Failed to launch {client}"))
}

/// Writes `config` to the settings' RDP file and starts the client on it.
/// The client is left running on its own; its exit status is never looked at.
pub fn launch(settings: &LocalSettings, config: &str) -> Result<()> {
    let rdp_file = &settings.rdp_file;
    std::fs::write(rdp_file, config)
        .context(format!("Failed to write RDP file {}", rdp_file.display()))?;

    let child = spawn_client(settings.client_executable(), rdp_file)?;
    tracing::debug!("Client started with pid {}", child.id());

    Ok(())
}

pub fn connect(settings: &LocalSettings, target: &RemoteTarget) -> Result<()> {
    println!("Connecting to {target}");

    let config = build_config(&target.address, &target.name);
    launch(settings, &config)?;

    if settings.notify {
        // A missing notification daemon must not fail the launch
        if let Err(e) = notify_rust::Notification::new()
            .summary(&format!("\"{}\" will open soon", target.name))
            .body(&format!("Connecting to {}", target.address))
            .show()
        {
            tracing::warn!("Failed to show desktop notification: {e}");
        }
    }

    Ok(())
}
