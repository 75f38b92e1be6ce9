use crate::{PeekShieldError, PeekShieldResult, processes::ProcessInfo};
use std::fs;

/// Regular login accounts start here on most distributions.
const FIRST_USER_UID: u32 = 1000;

/// Executable name of a process.
///
/// `comm` is cut to 15 bytes by the kernel, so it is only used when neither
/// the `exe` link nor `argv[0]` can be read.
pub(super) fn process_name(pid: u32) -> PeekShieldResult<String> {
    if let Some(name) = exe_name(pid).or_else(|| argv0_name(pid)) {
        return Ok(name);
    }
    fs::read_to_string(format!("/proc/{pid}/comm"))
        .map(|name| name.trim_end_matches('\n').to_owned())
        .map_err(|e| PeekShieldError::ProcessLookup {
            pid,
            reason: e.to_string(),
        })
}

fn exe_name(pid: u32) -> Option<String> {
    let target = fs::read_link(format!("/proc/{pid}/exe")).ok()?;
    let name = target.file_name()?.to_string_lossy().into_owned();
    // The link keeps pointing at a replaced binary, marked with this suffix.
    let name = name.strip_suffix(" (deleted)").unwrap_or(&name).to_owned();
    (!name.is_empty()).then_some(name)
}

fn argv0_name(pid: u32) -> Option<String> {
    let cmdline = fs::read(format!("/proc/{pid}/cmdline")).ok()?;
    let argv0 = cmdline.split(|&b| b == 0).next()?;
    let argv0 = String::from_utf8_lossy(argv0);
    let name = argv0.rsplit('/').next()?.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

fn process_uid(pid: u32) -> Option<u32> {
    let status = fs::read_to_string(format!("/proc/{pid}/status")).ok()?;
    status
        .lines()
        .find_map(|line| line.strip_prefix("Uid:"))
        .and_then(|ids| ids.split_whitespace().next())
        .and_then(|uid| uid.parse().ok())
}

pub(super) fn running_processes() -> PeekShieldResult<Vec<ProcessInfo>> {
    let entries = fs::read_dir("/proc")
        .map_err(|e| PeekShieldError::Platform(format!("Failed to read /proc: {e}")))?;

    let mut processes = Vec::new();
    for entry in entries.flatten() {
        let Some(pid) = entry
            .file_name()
            .to_str()
            .and_then(|name| name.parse::<u32>().ok())
        else {
            continue;
        };
        // The process may exit while we walk /proc.
        let Ok(name) = process_name(pid) else {
            continue;
        };
        let system_account = process_uid(pid).is_none_or(|uid| uid < FIRST_USER_UID);
        processes.push(ProcessInfo {
            pid,
            name,
            system_account,
        });
    }
    Ok(processes)
}
