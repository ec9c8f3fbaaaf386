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

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use conkyup::cli::Cli;
use conkyup::hwmon;
use conkyup::logger;
use conkyup::rcfile;
use conkyup::rewrite::{rewrite_document, RewriteOptions, SensorIndices};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.logging {
        logger::init_logging();
        logger::log_event(
            "startup",
            json!({ "args": std::env::args().skip(1).collect::<Vec<_>>() }),
        );
    }

    if args.list {
        for device in hwmon::enumerate()? {
            println!("hwmon{} {}", device.index, device.name);
        }
        return Ok(());
    }

    let rc_path = match args.rc {
        Some(path) => path,
        None => rcfile::default_rc_path().context("HOME is not set and no RC file was given")?,
    };

    let content = rcfile::load(&rc_path)?;

    // At most one probe per category; suppressed categories never probe.
    let sensors = SensorIndices {
        coretemp: resolve(hwmon::CORETEMP, args.no_coretemp),
        nvme: resolve(hwmon::NVME, args.no_nvme),
    };

    let opts = RewriteOptions {
        color: args.color,
        no_coretemp: args.no_coretemp,
        no_nvme: args.no_nvme,
    };
    let output = rewrite_document(&content, &opts, sensors);

    if args.logging {
        let changed = content
            .split('\n')
            .zip(output.split('\n'))
            .filter(|(before, after)| before != after)
            .count();
        logger::log_event(
            "rewrite",
            json!({
                "rc": rc_path.display().to_string(),
                "changed_lines": changed,
            }),
        );
    }

    if args.inplace {
        rcfile::save(&rc_path, &output)?;
        logger::log_event(
            "inplace_write",
            json!({ "rc": rc_path.display().to_string() }),
        );
    } else {
        print!("{output}");
    }

    Ok(())
}

fn resolve(category: &str, suppressed: bool) -> Option<u32> {
    if suppressed {
        return None;
    }
    let index = hwmon::locate(category);
    logger::log_event(
        "sensor_lookup",
        json!({ "category": category, "index": index }),
    );
    index
}
