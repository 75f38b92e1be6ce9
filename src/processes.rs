//! Process listing for picking blacklist entries.
use crate::{PeekShieldResult, platform};
use std::collections::BTreeSet;

/// Well-known operating system processes that are never worth blacklisting.
pub const SYSTEM_PROCESS_NAMES: &[&str] = &[
    "system",
    "idle",
    "smss.exe",
    "csrss.exe",
    "wininit.exe",
    "services.exe",
    "lsass.exe",
    "lsm.exe",
    "svchost.exe",
    "fontdrvhost.exe",
    "winlogon.exe",
    "dwm.exe",
    "spoolsv.exe",
    "sihost.exe",
    "explorer.exe",
    "taskhostw.exe",
    "ctfmon.exe",
    "searchui.exe",
    "startmenuexperiencehost.exe",
    "runtimebroker.exe",
    "securityhealthservice.exe",
    "wudfhost.exe",
    "backgroundtaskhost.exe",
    "systemsettings.exe",
    "searchapp.exe",
    "applicationframehost.exe",
    "textinputhost.exe",
    "audiodg.exe",
    "conhost.exe",
    "msedgewebview2.exe",
];

/// A running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    /// Owned by a service or system account rather than a logged-in user.
    pub system_account: bool,
}

/// Every process currently running on this machine.
pub fn running_processes() -> PeekShieldResult<Vec<ProcessInfo>> {
    platform::running_processes()
}

/// Sorted, de-duplicated names of user processes.
pub fn user_processes<I>(processes: I) -> Vec<String>
where
    I: IntoIterator<Item = ProcessInfo>,
{
    processes
        .into_iter()
        .filter(|p| !p.system_account && !p.name.is_empty())
        .filter(|p| !SYSTEM_PROCESS_NAMES.contains(&p.name.to_lowercase().as_str()))
        .map(|p| p.name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Names of the user processes running right now.
pub fn running_user_processes() -> PeekShieldResult<Vec<String>> {
    Ok(user_processes(running_processes()?))
}
