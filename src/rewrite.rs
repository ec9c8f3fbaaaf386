/*
 * This file is part of Conkyup.
 *
 * Copyright (C) 2025 Conkyup contributors
 *
 * Conkyup is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Conkyup is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Conkyup. If not, see <https://www.gnu.org/licenses/>.
 */

//! Single-pass line rewriter for conky rc documents.
//!
//! Lines are classified in a fixed precedence order: comments and the
//! `conky.config` block structure are never touched by content rules, color
//! substitution only applies to recognized keys inside the block, and hwmon
//! index substitution is scoped to the `== CPU ==` / `== Disk IO ==` section
//! lines. Everything else passes through byte-for-byte, so the output always
//! has exactly as many lines as the input.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

const COMMENT_PREFIX: &str = "--";
const BLOCK_OPENER: &str = "conky.config";
const BLOCK_CLOSER: &str = "}";
const CPU_SECTION: &str = "== CPU ==";
const DISK_SECTION: &str = "== Disk IO ==";
const SENSOR_MARKER: &str = "hwmon";

/// Assignment keys replaced by the color override.
const COLOR_KEYS: [&str; 4] = [
    "color0",
    "default_color",
    "default_outline_color",
    "default_shade_color",
];

lazy_static! {
    static ref HWMON_INDEX: Regex = Regex::new(r"(hwmon\s+)\d+").unwrap();
}

/// Requested rewrites, replacing the original's global option state.
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    pub color: Option<String>,
    pub no_coretemp: bool,
    pub no_nvme: bool,
}

/// Sensor indices resolved before the line pass. `None` means the category
/// was not found (or was suppressed) and the matching lines pass through.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorIndices {
    pub coretemp: Option<u32>,
    pub nvme: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Outside,
    Inside,
}

/// Rewrite the whole document in one top-to-bottom pass.
///
/// Splitting on `\n` keeps a trailing empty element for newline-terminated
/// input, so rejoining reproduces the input bytes exactly wherever no rule
/// fired.
pub fn rewrite_document(input: &str, opts: &RewriteOptions, sensors: SensorIndices) -> String {
    let mut block = Block::Outside;
    let lines: Vec<String> = input
        .split('\n')
        .map(|line| rewrite_line(line, &mut block, opts, sensors))
        .collect();
    lines.join("\n")
}

fn rewrite_line(
    line: &str,
    block: &mut Block,
    opts: &RewriteOptions,
    sensors: SensorIndices,
) -> String {
    if line.starts_with(COMMENT_PREFIX) {
        return line.to_string();
    }
    if line.starts_with(BLOCK_OPENER) {
        *block = Block::Inside;
        return line.to_string();
    }
    if *block == Block::Inside {
        // The closer must be exactly `}`; trailing whitespace keeps the
        // tracker inside the block.
        if line == BLOCK_CLOSER {
            *block = Block::Outside;
            return line.to_string();
        }
        if let Some(color) = &opts.color {
            if line.contains('=') {
                return rewrite_color(line, color);
            }
        }
    }
    if !line.contains(SENSOR_MARKER) {
        return line.to_string();
    }
    if line.starts_with(CPU_SECTION) && !opts.no_coretemp {
        return substitute_index(line, sensors.coretemp);
    }
    if line.starts_with(DISK_SECTION) && !opts.no_nvme {
        return substitute_index(line, sensors.nvme);
    }
    line.to_string()
}

/// Replace the value of a recognized color assignment, keeping everything
/// before the first `=` untouched.
fn rewrite_color(line: &str, color: &str) -> String {
    match line.split_once('=') {
        Some((prefix, _)) if COLOR_KEYS.contains(&prefix.trim()) => {
            format!("{prefix}= '{color}',")
        }
        _ => line.to_string(),
    }
}

/// Rewrite every `hwmon <digits>` token on the line to the resolved index,
/// preserving the whitespace between `hwmon` and the number. With no
/// resolved index the line keeps whatever was configured before.
fn substitute_index(line: &str, index: Option<u32>) -> String {
    match index {
        Some(index) => HWMON_INDEX
            .replace_all(line, |caps: &Captures| format!("{}{}", &caps[1], index))
            .into_owned(),
        None => line.to_string(),
    }
}
