// SPDX-License-Identifier: PMPL-1.0-or-later

//! External command invocation
//!
//! Source readers never spawn processes themselves; they go through a
//! [`CommandRunner`] so canned output can stand in for the live OS.

use crate::error::{Error, Result};
use encoding_rs::{Encoding, WINDOWS_1252};
use std::collections::HashMap;
use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs a named program and returns its standard output as text.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// [`CommandRunner`] backed by `std::process`.
///
/// Without a timeout the call blocks for as long as the OS command does.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    timeout: Option<Duration>,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill any command still running after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!(program, ?args, "running command");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| spawn_error(program, err))?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match self.timeout {
            Some(timeout) => wait_with_deadline(program, &mut child, timeout)?,
            None => child.wait().map_err(|source| invocation(program, source))?,
        };

        let stdout = join_pipe(stdout).map_err(|source| invocation(program, source))?;
        let stderr = join_pipe(stderr).map_err(|source| invocation(program, source))?;

        if !status.success() {
            return Err(Error::CommandFailed {
                program: program.to_string(),
                status: status.to_string(),
                stderr: decode_output(&stderr).trim().to_string(),
            });
        }

        Ok(decode_output(&stdout))
    }
}

fn spawn_error(program: &str, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => Error::Unavailable {
            program: program.to_string(),
            reason: err.to_string(),
        },
        _ => invocation(program, err),
    }
}

fn invocation(program: &str, source: io::Error) -> Error {
    Error::Invocation {
        program: program.to_string(),
        source,
    }
}

fn wait_with_deadline(program: &str, child: &mut Child, timeout: Duration) -> Result<ExitStatus> {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait().map_err(|source| invocation(program, source))? {
            return Ok(status);
        }
        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            warn!(program, ?timeout, "command timed out");
            return Err(Error::TimedOut {
                program: program.to_string(),
                timeout,
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

// Pipes are read on their own threads so a child that fills one cannot stall.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn join_pipe(handle: JoinHandle<io::Result<Vec<u8>>>) -> io::Result<Vec<u8>> {
    handle
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("pipe reader panicked")))
}

/// Decodes command output: BOM-tagged Unicode, then UTF-8, then Windows-1252.
pub(crate) fn decode_output(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    }
}

/// Canned response for one command line in a [`ScriptedRunner`].
#[derive(Debug, Clone)]
pub enum Scripted {
    Stdout(String),
    /// Program not installed.
    Missing,
    /// Program ran and exited non-zero.
    Fails,
    /// The invocation machinery itself broke.
    Broken,
}

/// [`CommandRunner`] that answers from a fixed script instead of the OS.
///
/// Commands are keyed by program and arguments joined with single spaces.
/// Anything not scripted behaves like a missing program.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    script: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command_line: &str, response: Scripted) -> Self {
        self.script.insert(command_line.to_string(), response);
        self
    }

    pub fn stdout(self, command_line: &str, stdout: &str) -> Self {
        self.respond(command_line, Scripted::Stdout(stdout.to_string()))
    }

    /// Command lines run so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command_line.clone());
        }

        match self.script.get(&command_line) {
            Some(Scripted::Stdout(out)) => Ok(out.clone()),
            Some(Scripted::Fails) => Err(Error::CommandFailed {
                program: program.to_string(),
                status: "exit status: 1".to_string(),
                stderr: String::new(),
            }),
            Some(Scripted::Broken) => Err(invocation(
                program,
                io::Error::other("scripted invocation failure"),
            )),
            Some(Scripted::Missing) | None => Err(Error::Unavailable {
                program: program.to_string(),
                reason: "not scripted".to_string(),
            }),
        }
    }
}
