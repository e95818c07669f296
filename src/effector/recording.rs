//! Recording pin effector for tests and demos.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::time::Instant;

use crate::config::units::PinId;

use super::{EffectorError, Level, PinEffector};

/// One recorded pin write.
#[derive(Debug, Clone)]
pub struct WriteRecord {
    /// Pin that was written.
    pub pin: PinId,
    /// Level that was written.
    pub level: Level,
    /// When the write was issued (tokio clock, so paused-time tests can
    /// assert pacing gaps).
    pub at: Instant,
}

#[derive(Debug, Default)]
struct RecordingState {
    configured: Vec<PinId>,
    writes: Vec<WriteRecord>,
    /// Remaining successful writes before injected failures kick in.
    write_budget: Option<usize>,
    /// Pins whose configure call fails.
    failing_pins: Vec<PinId>,
}

/// A [`PinEffector`] that records every operation instead of touching
/// hardware.
///
/// Clones share the same log, so the handle given to a machine can be kept
/// and inspected after the machine owns its clone. Failures can be injected
/// to exercise actuation error paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingEffector {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingEffector {
    /// Create a new recording effector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins configured for output, in configuration order.
    pub fn configured_pins(&self) -> Vec<PinId> {
        self.lock().configured.clone()
    }

    /// All recorded writes, in issue order.
    pub fn writes(&self) -> Vec<WriteRecord> {
        self.lock().writes.clone()
    }

    /// Number of recorded writes.
    pub fn write_count(&self) -> usize {
        self.lock().writes.len()
    }

    /// The last level written to a pin, if any.
    pub fn level_of(&self, pin: PinId) -> Option<Level> {
        self.lock()
            .writes
            .iter()
            .rev()
            .find(|w| w.pin == pin)
            .map(|w| w.level)
    }

    /// Make every write after the next `budget` successful ones fail.
    pub fn fail_writes_after(&self, budget: usize) {
        self.lock().write_budget = Some(budget);
    }

    /// Make configuring the given pin fail.
    pub fn fail_configure_of(&self, pin: PinId) {
        self.lock().failing_pins.push(pin);
    }

    /// Drop all recorded operations (injected failures stay armed).
    pub fn clear(&self) {
        let mut state = self.lock();
        state.configured.clear();
        state.writes.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PinEffector for RecordingEffector {
    async fn configure(&self, pin: PinId) -> Result<(), EffectorError> {
        let mut state = self.lock();
        if state.failing_pins.contains(&pin) {
            return Err(EffectorError::new(format!("pin {pin} refused setup")));
        }
        state.configured.push(pin);
        Ok(())
    }

    async fn write(&self, pin: PinId, level: Level) -> Result<(), EffectorError> {
        let mut state = self.lock();
        if let Some(budget) = state.write_budget.as_mut() {
            if *budget == 0 {
                return Err(EffectorError::new(format!("pin {pin} write refused")));
            }
            *budget -= 1;
        }
        state.writes.push(WriteRecord {
            pin,
            level,
            at: Instant::now(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_in_order() {
        let effector = RecordingEffector::new();
        effector.configure(PinId(4)).await.unwrap();
        effector.write(PinId(4), Level::High).await.unwrap();
        effector.write(PinId(4), Level::Low).await.unwrap();

        assert_eq!(effector.configured_pins(), vec![PinId(4)]);
        assert_eq!(effector.write_count(), 2);
        assert_eq!(effector.level_of(PinId(4)), Some(Level::Low));
    }

    #[tokio::test]
    async fn test_clones_share_the_log() {
        let effector = RecordingEffector::new();
        let clone = effector.clone();
        clone.write(PinId(7), Level::High).await.unwrap();

        assert_eq!(effector.write_count(), 1);
    }

    #[tokio::test]
    async fn test_injected_write_failure() {
        let effector = RecordingEffector::new();
        effector.fail_writes_after(1);

        assert!(effector.write(PinId(1), Level::High).await.is_ok());
        assert!(effector.write(PinId(1), Level::Low).await.is_err());
        assert_eq!(effector.write_count(), 1);
    }

    #[tokio::test]
    async fn test_injected_configure_failure() {
        let effector = RecordingEffector::new();
        effector.fail_configure_of(PinId(9));

        assert!(effector.configure(PinId(8)).await.is_ok());
        assert!(effector.configure(PinId(9)).await.is_err());
        assert_eq!(effector.configured_pins(), vec![PinId(8)]);
    }
}
