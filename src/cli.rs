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

//! Command Line Interface

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "conkyup")]
#[command(version)]
#[command(about = "Update hwmon sensor indices in a conky rc file")]
pub struct Cli {
    /// Conky rc file (defaults to ~/.conkyrc)
    #[arg(value_name = "RC")]
    pub rc: Option<PathBuf>,

    /// Rewrite the rc file in place instead of printing to stdout
    #[arg(short, long)]
    pub inplace: bool,

    /// Change the primary color keys to COLOR
    #[arg(short, long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Do not update the coretemp (CPU) hwmon index
    #[arg(long)]
    pub no_coretemp: bool,

    /// Do not update the nvme (disk) hwmon index
    #[arg(long)]
    pub no_nvme: bool,

    /// List hwmon devices and exit
    #[arg(long)]
    pub list: bool,

    /// Append JSON event logs
    #[arg(long)]
    pub logging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["conkyup"]).unwrap();
        assert_eq!(cli.rc, None);
        assert!(!cli.inplace);
        assert_eq!(cli.color, None);
        assert!(!cli.no_coretemp);
        assert!(!cli.no_nvme);
        assert!(!cli.list);
        assert!(!cli.logging);
    }

    #[test]
    fn test_full_surface() {
        let cli = Cli::try_parse_from([
            "conkyup",
            "-i",
            "-c",
            "red",
            "--no-coretemp",
            "--no-nvme",
            "/etc/conky/conky.conf",
        ])
        .unwrap();
        assert_eq!(cli.rc, Some(PathBuf::from("/etc/conky/conky.conf")));
        assert!(cli.inplace);
        assert_eq!(cli.color.as_deref(), Some("red"));
        assert!(cli.no_coretemp);
        assert!(cli.no_nvme);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from(["conkyup", "--inplace", "--color", "blue"]).unwrap();
        assert!(cli.inplace);
        assert_eq!(cli.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_rejects_second_positional() {
        assert!(Cli::try_parse_from(["conkyup", "a.conf", "b.conf"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["conkyup", "--frobnicate"]).is_err());
    }
}
