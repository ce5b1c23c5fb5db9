// SPDX-License-Identifier: PMPL-1.0-or-later

//! X11 keyboard layouts on Linux and the BSDs

use super::SourceReader;
use crate::command::CommandRunner;
use crate::error::Result;
use crate::mapping::RawIdentifier;
use tracing::debug;

/// Reads configured X11 layouts.
///
/// `localectl status` is asked first since it reflects the system keymap
/// even outside an X session. Without systemd, or when it lists no layout,
/// `setxkbmap -query` is used instead.
pub struct X11LayoutReader;

impl SourceReader for X11LayoutReader {
    fn name(&self) -> &'static str {
        "x11-layouts"
    }

    fn read(&self, runner: &dyn CommandRunner) -> Result<Vec<RawIdentifier>> {
        match runner.run("localectl", &["status"]) {
            Ok(output) => {
                let layouts = parse_layouts(&output);
                if !layouts.is_empty() {
                    return Ok(layouts);
                }
                debug!("localectl lists no X11 layout, asking setxkbmap");
            }
            Err(err) if err.is_source_unavailable() => {
                debug!(error = %err, "localectl unavailable, asking setxkbmap");
            }
            Err(err) => return Err(err),
        }

        let output = runner.run("setxkbmap", &["-query"])?;
        Ok(parse_layouts(&output))
    }
}

/// Extracts layouts from the first `Layout:`/`layout:` line.
///
/// Handles both `X11 Layout: us,kr` (localectl) and `layout:     us,kr`
/// (setxkbmap). `n/a` and `-` mark an unset keymap and yield nothing.
pub fn parse_layouts(output: &str) -> Vec<RawIdentifier> {
    let Some(line) = output
        .lines()
        .find(|line| line.contains("Layout:") || line.contains("layout:"))
    else {
        return Vec::new();
    };

    let Some((_, value)) = line.split_once(':') else {
        return Vec::new();
    };

    value
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|layout| !matches!(*layout, "" | "n/a" | "-"))
        .map(|layout| RawIdentifier::LayoutCode(layout.to_string()))
        .collect()
}
