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

use crate::types::remote_target::RemoteTarget;
use crate::utils::rdp_client::get_rdp_client_executable;
use anyhow::{Context, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalSettings {
    pub data_file: PathBuf,
    pub rdp_file: PathBuf,
    pub client: Option<String>,
    pub notify: bool,
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("apps_data.json"),
            rdp_file: PathBuf::from("rdp_settings.rdp"),
            client: None,
            notify: true,
        }
    }
}

impl LocalSettings {
    /// Reads the YAML settings file. A missing file means defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read settings file {}", path.display()))?;

        // An empty YAML document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .context(format!("Failed to parse settings file {}", path.display()))
    }

    pub fn check_ok(&self) -> anyhow::Result<()> {
        for file in [&self.data_file, &self.rdp_file] {
            let Some(parent) = file.parent() else {
                continue;
            };

            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(anyhow!("Directory does not exist: {}", parent.display())
                    .context(format!("Cannot store {}", file.display())));
            }
        }

        Ok(())
    }

    pub fn client_executable(&self) -> &str {
        match self.client.as_deref() {
            Some(client) if !client.trim().is_empty() => client,
            _ => get_rdp_client_executable(),
        }
    }

    /// Loads every stored target. On first run the default targets are
    /// written out and returned.
    pub fn load_all(&self) -> anyhow::Result<Vec<RemoteTarget>> {
        let data_file = &self.data_file;

        let content = match std::fs::read_to_string(data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "No data file at {}, writing default targets",
                    data_file.display()
                );
                let defaults = RemoteTarget::defaults();
                self.save_all(&defaults)?;
                return Ok(defaults);
            }
            Err(e) => {
                return Err(anyhow!(e)
                    .context(format!("Failed to read data file {}", data_file.display())));
            }
        };

        let targets: Vec<RemoteTarget> = serde_json::from_str(&content)
            .context(format!("Failed to parse data file {}", data_file.display()))?;

        tracing::debug!("Loaded {} targets from {}", targets.len(), data_file.display());

        Ok(targets)
    }

    /// Overwrites the data file with the full list.
    pub fn save_all(&self, targets: &[RemoteTarget]) -> anyhow::Result<()> {
        let data_file = &self.data_file;
        let content =
            serde_json::to_string(targets).context("Failed to serialize remote targets")?;
        std::fs::write(data_file, content)
            .context(format!("Failed to write data file {}", data_file.display()))?;

        tracing::debug!("Saved {} targets to {}", targets.len(), data_file.display());

        Ok(())
    }
}
