// SPDX-License-Identifier: PMPL-1.0-or-later

//! Probe configuration from the environment

use crate::error::{Error, Result};
use crate::sources::Platform;
use std::time::Duration;

pub const PLATFORM_ENV: &str = "KEYLOC_PLATFORM";
pub const TIMEOUT_ENV: &str = "KEYLOC_COMMAND_TIMEOUT_MS";
pub const PARALLEL_ENV: &str = "KEYLOC_PARALLEL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Reader set to use; `None` means the host platform.
    pub platform: Option<Platform>,
    /// Upper bound for each OS command. `None` waits as long as the OS does.
    pub command_timeout: Option<Duration>,
    pub parallel: bool,
}

impl ProbeConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let value = |key| lookup(key).filter(|v: &String| !v.trim().is_empty());

        let platform = match value(PLATFORM_ENV) {
            Some(raw) => Some(Platform::parse(&raw).ok_or(Error::InvalidConfig {
                key: PLATFORM_ENV,
                value: raw,
            })?),
            None => None,
        };

        let command_timeout = match value(TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(ms) => Some(Duration::from_millis(ms)),
                Err(_) => {
                    return Err(Error::InvalidConfig {
                        key: TIMEOUT_ENV,
                        value: raw,
                    })
                }
            },
            None => None,
        };

        let parallel = match value(PARALLEL_ENV) {
            Some(raw) => parse_flag(&raw).ok_or(Error::InvalidConfig {
                key: PARALLEL_ENV,
                value: raw,
            })?,
            None => false,
        };

        Ok(Self {
            platform,
            command_timeout,
            parallel,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
