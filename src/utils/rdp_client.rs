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

/// Client started when neither the command line nor the settings name one.
#[cfg(windows)]
pub fn get_rdp_client_executable() -> &'static str {
    "mstsc.exe"
}

// xfreerdp3 reads .rdp files given as a bare argument, like mstsc does.
#[cfg(not(windows))]
pub fn get_rdp_client_executable() -> &'static str {
    "xfreerdp3"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_client_is_not_empty() {
        assert!(!get_rdp_client_executable().is_empty());
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_uses_mstsc() {
        assert_eq!(get_rdp_client_executable(), "mstsc.exe");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unix_uses_freerdp() {
        assert_eq!(get_rdp_client_executable(), "xfreerdp3");
    }
}
