use std::collections::HashSet;

/// Set of executable names whose windows must never be captured unblurred.
///
/// Entries may be bare names (`WeChat.exe`), names without an extension
/// (`wechat`) or full paths (`C:\Program Files\Tencent\WeChat.exe`).
/// Matching is case-insensitive and tolerates a missing extension on either side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: Vec<String>,
    keys: HashSet<String>,
}

impl Blacklist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let mut keys = HashSet::with_capacity(entries.len() * 2);
        for entry in &entries {
            let base = basename(entry.trim()).to_lowercase();
            if base.is_empty() {
                continue;
            }
            keys.insert(strip_extension(&base).to_owned());
            keys.insert(base);
        }
        Self { entries, keys }
    }

    /// Entries as configured, in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether a process name (with or without extension) is blacklisted.
    pub fn matches(&self, process_name: &str) -> bool {
        if self.keys.is_empty() {
            return false;
        }
        let name = basename(process_name).to_lowercase();
        self.keys.contains(&name) || self.keys.contains(strip_extension(&name))
    }

    /// Whether any of the given process names is blacklisted.
    pub fn any_running<I, S>(&self, process_names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        process_names
            .into_iter()
            .any(|name| self.matches(name.as_ref()))
    }
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// `wechat.exe` -> `wechat`; dotfiles such as `.hidden` keep their name.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => &name[..dot],
        _ => name,
    }
}
