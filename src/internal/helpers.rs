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

use crate::internal::types::EditResponse;
use crate::types::remote_target::RemoteTarget;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Asks for a new `name,address` pair for `current`. Pressing enter on an
/// empty line, or closing the input, cancels.
pub fn prompt_edit<R: BufRead, W: Write>(
    current: &RemoteTarget,
    input: &mut R,
    output: &mut W,
) -> Result<EditResponse> {
    writeln!(output, "Enter the application name and IP address, separated by a comma.")?;
    writeln!(output, "Current value: {}", current.to_edit_input())?;
    write!(output, "> ")?;
    output.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read edit input")?;

    Ok(EditResponse::from_answer(&answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_shows_current_value() {
        let target = RemoteTarget::new("App1", "192.168.1.1");
        let mut input = Cursor::new("Paint,10.0.0.9\n");
        let mut output = Vec::new();

        let response = prompt_edit(&target, &mut input, &mut output).unwrap();

        assert_eq!(
            response,
            EditResponse::Submitted("Paint,10.0.0.9".to_string())
        );
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Current value: App1,192.168.1.1"));
    }

    #[test]
    fn test_prompt_cancel_on_empty_line_or_eof() {
        let target = RemoteTarget::new("App1", "192.168.1.1");

        let response =
            prompt_edit(&target, &mut Cursor::new("\n"), &mut Vec::new()).unwrap();
        assert_eq!(response, EditResponse::Cancelled);

        let response = prompt_edit(&target, &mut Cursor::new(""), &mut Vec::new()).unwrap();
        assert_eq!(response, EditResponse::Cancelled);
    }
}
