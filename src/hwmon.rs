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

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Root of the kernel hardware-monitor enumeration.
pub const SYSFS_HWMON: &str = "/sys/class/hwmon";

/// Driver label of the CPU temperature sensor.
pub const CORETEMP: &str = "coretemp";

/// Driver label of the NVMe controller temperature sensor.
pub const NVME: &str = "nvme";

#[derive(Error, Debug)]
pub enum HwmonError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One entry of the hwmon enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HwmonDevice {
    pub index: u32,
    pub name: String,
}

/// First hwmon index whose `name` file content equals `category` exactly.
///
/// The comparison does not trim: a name file ending in a newline only matches
/// a category that carries the same newline. A name file that exists but
/// cannot be read is skipped; the scan ends at the first index with no name
/// file at all.
pub fn locate(category: &str) -> Option<u32> {
    locate_under(Path::new(SYSFS_HWMON), category)
}

pub fn locate_under(root: &Path, category: &str) -> Option<u32> {
    candidate_names(root)
        .find(|(_, path)| {
            fs::read_to_string(path)
                .map(|name| name == category)
                .unwrap_or(false)
        })
        .map(|(index, _)| index)
}

/// All `(index, name)` entries in probe order, names trimmed for display.
pub fn enumerate() -> Result<Vec<HwmonDevice>, HwmonError> {
    enumerate_under(Path::new(SYSFS_HWMON))
}

pub fn enumerate_under(root: &Path) -> Result<Vec<HwmonDevice>, HwmonError> {
    let mut devices = Vec::new();
    for (index, path) in candidate_names(root) {
        let name = fs::read_to_string(&path)?;
        devices.push(HwmonDevice {
            index,
            name: name.trim_end().to_string(),
        });
    }
    Ok(devices)
}

/// Lazy sequence of `(index, name-file path)` candidates starting at hwmon0,
/// ending before the first index whose name file does not exist.
fn candidate_names(root: &Path) -> impl Iterator<Item = (u32, PathBuf)> + '_ {
    (0u32..)
        .map(move |i| (i, root.join(format!("hwmon{i}")).join("name")))
        .take_while(|(_, path)| path.is_file())
}
