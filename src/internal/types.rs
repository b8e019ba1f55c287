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

/// Failures the user can cause and fix from the command line.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TargetError {
    #[error("Expected 'name,address' separated by exactly one comma, got {parts} part(s): '{input}'")]
    MalformedEditInput { input: String, parts: usize },

    #[error("Both an application name and an address are required (missing {0})")]
    MissingField(&'static str),

    #[error("No target #{index}, there are {len} stored")]
    NoSuchTarget { index: usize, len: usize },
}

/// A target picked by the user, numbered from 1 as in `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection(pub usize);

impl Selection {
    pub fn resolve(self, len: usize) -> Result<usize, TargetError> {
        match self.0 {
            0 => Err(TargetError::NoSuchTarget { index: 0, len }),
            n if n > len => Err(TargetError::NoSuchTarget { index: n, len }),
            n => Ok(n - 1),
        }
    }
}

/// What the edit prompt handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResponse {
    Submitted(String),
    Cancelled,
}

impl EditResponse {
    /// An empty answer counts as dismissing the prompt.
    pub fn from_answer(answer: &str) -> Self {
        let answer = answer.trim_end_matches(['\r', '\n']);
        if answer.is_empty() {
            EditResponse::Cancelled
        } else {
            EditResponse::Submitted(answer.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    Unchanged,
}
