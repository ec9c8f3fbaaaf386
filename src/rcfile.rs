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

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Conky reads `~/.conkyrc` when no file is given; so do we.
pub fn default_rc_path() -> Option<PathBuf> {
    env::var("HOME")
        .ok()
        .map(|home| Path::new(&home).join(".conkyrc"))
}

/// Load the whole rc document. A missing file is fatal and carries the path.
pub fn load(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("{} file not exists", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Replace the rc file's content with the rewritten document in one write.
pub fn save(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_default_rc_path_uses_home() {
        env::set_var("HOME", "/home/testuser");
        assert_eq!(
            default_rc_path(),
            Some(PathBuf::from("/home/testuser/.conkyrc"))
        );
    }

    #[test]
    #[serial]
    fn test_default_rc_path_without_home() {
        let saved = env::var("HOME").ok();
        env::remove_var("HOME");
        assert_eq!(default_rc_path(), None);
        if let Some(home) = saved {
            env::set_var("HOME", home);
        }
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".conkyrc");
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("file not exists"));
        assert!(err.to_string().contains(".conkyrc"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".conkyrc");
        save(&path, "conky.config = {\n}\n").unwrap();
        assert_eq!(load(&path).unwrap(), "conky.config = {\n}\n");
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".conkyrc");
        save(&path, "old content that is much longer than the new one\n").unwrap();
        save(&path, "new\n").unwrap();
        assert_eq!(load(&path).unwrap(), "new\n");
    }
}
