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

//! Conkyup - rewrite hwmon sensor indices in a conky rc file
//!
//! The kernel renumbers hwmon devices across boots, which breaks conky
//! configurations that reference `hwmon <N>` by index. This crate locates the
//! current indices of the coretemp and nvme sensors and rewrites the rc file
//! to match, with an optional color-theme override.

pub mod cli;
pub mod hwmon;
pub mod logger;
pub mod rcfile;
pub mod rewrite;
