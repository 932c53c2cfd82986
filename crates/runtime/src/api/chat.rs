//! Chat log access.
use chrono::{DateTime, Utc};

use super::errors::ChatLogError;

/// One chat line with the time it was logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

impl ChatEntry {
    pub fn new(timestamp: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }
}

/// Recent chat lines.
///
/// Every call to [`ChatLog::entries`] starts a fresh, finite scan. An item may
/// be an error when the underlying log changed mid-scan.
pub trait ChatLog: Send {
    fn entries(&self) -> Box<dyn Iterator<Item = Result<ChatEntry, ChatLogError>> + '_>;
}

/// Result of scanning the chat log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatScan {
    /// The scan completed with this many matching lines.
    Matched(usize),
    /// The log changed during the scan; nothing can be concluded this tick.
    Unavailable,
}

impl ChatScan {
    pub fn found(self) -> bool {
        matches!(self, Self::Matched(count) if count > 0)
    }
}

/// Scans any entry iterator, stopping at the first error.
pub fn scan_entries(
    entries: impl Iterator<Item = Result<ChatEntry, ChatLogError>>,
    predicate: &mut dyn FnMut(&ChatEntry) -> bool,
) -> ChatScan {
    let mut matched = 0;
    for entry in entries {
        match entry {
            Ok(entry) if predicate(&entry) => matched += 1,
            Ok(_) => {}
            Err(err) => {
                tracing::debug!("chat scan abandoned: {}", err);
                return ChatScan::Unavailable;
            }
        }
    }
    ChatScan::Matched(matched)
}

/// A chat log that never has any lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoChatLog;

impl ChatLog for NoChatLog {
    fn entries(&self) -> Box<dyn Iterator<Item = Result<ChatEntry, ChatLogError>> + '_> {
        Box::new(std::iter::empty())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn scan_counts_matches_and_stops_on_error() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let ok = vec![
            Ok(ChatEntry::new(at, "Goblin is out of range.")),
            Ok(ChatEntry::new(at, "You hit the Goblin.")),
        ];
        let scan = scan_entries(ok.into_iter(), &mut |e| e.text.contains("out of range"));
        assert_eq!(scan, ChatScan::Matched(1));
        assert!(scan.found());

        let broken = vec![
            Ok(ChatEntry::new(at, "Goblin is out of range.")),
            Err(ChatLogError::Modified),
        ];
        let scan = scan_entries(broken.into_iter(), &mut |_| true);
        assert_eq!(scan, ChatScan::Unavailable);
        assert!(!scan.found());
    }
}
