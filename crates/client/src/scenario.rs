//! Recorded scenarios and the collaborators that replay them.
//!
//! A scenario is a RON list of frames. Each frame is the world snapshot for
//! one tick plus the chat lines logged during it:
//!
//! ```ron
//! (
//!     frames: [
//!         (
//!             snapshot: (player: (name: "Hero", hpp: 100), units: []),
//!             chat: ["The Goblin is out of range."],
//!         ),
//!     ],
//! )
//! ```
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::TimeDelta;
use farm_core::{NotoriousMonsterAlert, Position, Unit};
use runtime::{
    ChatEntry, ChatLog, ChatLogError, Clock, Command, CommandSink, ManualClock, Navigator,
    SnapshotError, WorldSnapshot, WorldSnapshotProvider,
};
use serde::Deserialize;

/// One recorded tick.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Frame {
    pub snapshot: WorldSnapshot,
    pub chat: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub frames: Vec<Frame>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

// ============================================================================
// World and chat
// ============================================================================

/// Serves scenario frames one per tick.
///
/// The clock advances by `step` before every frame but the first, and the
/// frame's chat lines are stamped with the new time.
pub struct ReplayWorld {
    frames: VecDeque<Frame>,
    chat: ReplayChat,
    clock: ManualClock,
    step: TimeDelta,
    started: bool,
}

impl ReplayWorld {
    pub fn new(scenario: Scenario, chat: ReplayChat, clock: ManualClock, step: TimeDelta) -> Self {
        Self {
            frames: scenario.frames.into(),
            chat,
            clock,
            step,
            started: false,
        }
    }
}

impl WorldSnapshotProvider for ReplayWorld {
    fn snapshot(&mut self) -> Result<WorldSnapshot, SnapshotError> {
        let frame = self.frames.pop_front().ok_or(SnapshotError::Exhausted)?;

        if self.started {
            self.clock.advance(self.step);
        }
        self.started = true;

        let now = self.clock.now();
        self.chat
            .replace(frame.chat.into_iter().map(|text| ChatEntry::new(now, text)));
        Ok(frame.snapshot)
    }
}

/// Chat lines of the current frame. Clones share the same lines.
#[derive(Clone, Debug, Default)]
pub struct ReplayChat {
    lines: Arc<Mutex<Vec<ChatEntry>>>,
}

impl ReplayChat {
    fn replace(&self, lines: impl IntoIterator<Item = ChatEntry>) {
        let mut current = self.lines.lock().unwrap_or_else(|p| p.into_inner());
        current.clear();
        current.extend(lines);
    }
}

impl ChatLog for ReplayChat {
    fn entries(&self) -> Box<dyn Iterator<Item = Result<ChatEntry, ChatLogError>> + '_> {
        // A poisoned lock means a writer died mid-update.
        match self.lines.lock() {
            Ok(lines) => Box::new(lines.clone().into_iter().map(Ok)),
            Err(_) => Box::new(std::iter::once(Err(ChatLogError::Modified))),
        }
    }
}

// ============================================================================
// Logging collaborators
// ============================================================================

/// Logs movement instead of performing it.
#[derive(Debug)]
pub struct LoggingNavigator {
    tolerance: f64,
}

impl Default for LoggingNavigator {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

impl Navigator for LoggingNavigator {
    fn distance_tolerance(&self) -> f64 {
        self.tolerance
    }

    fn set_distance_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    fn face_heading(&mut self, position: Position) {
        tracing::info!("face ({:.1}, {:.1}, {:.1})", position.x, position.y, position.z);
    }

    fn set_follow_coords(&mut self, dx: f64, dy: f64, dz: f64) {
        tracing::info!("follow ({:.1}, {:.1}, {:.1})", dx, dy, dz);
    }

    fn reset(&mut self) {
        tracing::info!("stop");
    }
}

/// Logs and counts commands.
#[derive(Clone, Debug, Default)]
pub struct LoggingCommandSink {
    sent: Arc<AtomicUsize>,
}

impl LoggingCommandSink {
    pub fn count(&self) -> usize {
        self.sent.load(Ordering::Relaxed)
    }
}

impl CommandSink for LoggingCommandSink {
    fn send(&mut self, command: Command) {
        self.sent.fetch_add(1, Ordering::Relaxed);
        match command {
            Command::Send(text) => tracing::info!("> {}", text),
            other => tracing::info!("> {:?}", other),
        }
    }
}

/// Announces notorious monsters in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingAlert;

impl NotoriousMonsterAlert for LoggingAlert {
    fn notorious_monster_found(&self, mob: &Unit) {
        tracing::warn!("NOTORIOUS MONSTER: {} ({:#x}) at {:.1}", mob.name, mob.id, mob.distance);
    }
}
