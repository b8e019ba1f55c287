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

use crate::internal::types::{EditOutcome, EditResponse, Selection, TargetError};
use crate::types::local_settings::LocalSettings;
use crate::types::remote_target::RemoteTarget;
use anyhow::Result;

pub fn create(
    settings: &LocalSettings,
    targets: &mut Vec<RemoteTarget>,
    name: &str,
    address: &str,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(TargetError::MissingField("name").into());
    }
    if address.trim().is_empty() {
        return Err(TargetError::MissingField("address").into());
    }

    let target = RemoteTarget::new(name.trim(), address.trim());
    tracing::info!("Adding target {target}");
    targets.push(target);
    settings.save_all(targets)?;

    Ok(())
}

/// Splits `name,address`. Parts may be empty but there must be exactly two.
pub fn parse_edit_input(input: &str) -> Result<(String, String), TargetError> {
    let parts: Vec<&str> = input.split(',').collect();

    match parts.as_slice() {
        [name, address] => Ok((name.trim().to_string(), address.trim().to_string())),
        _ => Err(TargetError::MalformedEditInput {
            input: input.to_string(),
            parts: parts.len(),
        }),
    }
}

/// Applies the answer of the edit prompt to the selected target. Nothing is
/// written unless the target actually gets replaced.
pub fn apply_edit(
    settings: &LocalSettings,
    targets: &mut [RemoteTarget],
    selection: Selection,
    response: EditResponse,
) -> Result<EditOutcome> {
    let index = selection.resolve(targets.len())?;

    let input = match response {
        EditResponse::Cancelled => {
            tracing::debug!("Edit of target #{} cancelled", selection.0);
            return Ok(EditOutcome::Unchanged);
        }
        EditResponse::Submitted(input) => input,
    };

    let (name, address) = parse_edit_input(&input)?;

    let target = &mut targets[index];
    target.name = name;
    target.address = address;
    tracing::info!("Target #{} is now {}", selection.0, target);

    settings.save_all(targets)?;

    Ok(EditOutcome::Updated)
}

/// Field-by-field edit. Fields left as `None` keep their value; given values
/// are stored as-is.
pub fn update_fields(
    settings: &LocalSettings,
    targets: &mut [RemoteTarget],
    selection: Selection,
    name: Option<&str>,
    address: Option<&str>,
) -> Result<()> {
    let index = selection.resolve(targets.len())?;

    let target = &mut targets[index];
    if let Some(name) = name {
        target.name = name.to_string();
    }
    if let Some(address) = address {
        target.address = address.to_string();
    }
    tracing::info!("Target #{} is now {}", selection.0, target);

    settings.save_all(targets)?;

    Ok(())
}

pub fn delete(
    settings: &LocalSettings,
    targets: &mut Vec<RemoteTarget>,
    selection: Selection,
) -> Result<RemoteTarget> {
    let index = selection.resolve(targets.len())?;

    let removed = targets.remove(index);
    tracing::info!("Deleted target {removed}");
    settings.save_all(targets)?;

    Ok(removed)
}

pub fn print_targets(targets: &[RemoteTarget]) {
    if targets.is_empty() {
        println!("No remote targets stored.");
        return;
    }

    for (i, target) in targets.iter().enumerate() {
        println!("{:>3}. {}", i + 1, target);
    }
}
