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

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A named remote-desktop shortcut.
///
/// The address is persisted under the `default_ip` key so files written by
/// earlier releases keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteTarget {
    pub name: String,
    #[serde(rename = "default_ip")]
    pub address: String,
}

impl RemoteTarget {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Records written on first run, when no data file exists yet.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("App1", "192.168.1.1"),
            Self::new("App2", "192.168.1.2"),
        ]
    }

    /// Value shown in the edit prompt, in the same shape the prompt expects back.
    pub fn to_edit_input(&self) -> String {
        format!("{},{}", self.name, self.address)
    }
}

impl Display for RemoteTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_address_as_default_ip() {
        let target = RemoteTarget::new("App1", "10.0.0.5");
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, r#"{"name":"App1","default_ip":"10.0.0.5"}"#);
    }

    #[test]
    fn test_deserializes_legacy_file_entry() {
        let target: RemoteTarget =
            serde_json::from_str(r#"{"name": "Excel", "default_ip": "192.168.0.20"}"#).unwrap();
        assert_eq!(target, RemoteTarget::new("Excel", "192.168.0.20"));
    }

    #[test]
    fn test_display_matches_list_label() {
        let target = RemoteTarget::new("App2", "192.168.1.2");
        assert_eq!(target.to_string(), "App2 - 192.168.1.2");
    }

    #[test]
    fn test_edit_input_is_comma_separated() {
        let target = RemoteTarget::new("App2", "192.168.1.2");
        assert_eq!(target.to_edit_input(), "App2,192.168.1.2");
    }

    #[test]
    fn test_defaults_are_two_fixed_records() {
        let defaults = RemoteTarget::defaults();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0], RemoteTarget::new("App1", "192.168.1.1"));
        assert_eq!(defaults[1], RemoteTarget::new("App2", "192.168.1.2"));
    }
}
