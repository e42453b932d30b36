/// Polite status announcer
///
/// The single live channel for short human-readable status strings
/// ("Opened modal for X", "Zoom enabled"). Each announcement schedules its
/// own clear; the epoch makes sure a newer announcement is never wiped by
/// the clear timer of an older one.

#[derive(Debug, Clone, Default)]
pub struct Announcer {
    message: Option<String>,
    epoch: u64,
}

impl Announcer {
    /// Publish a message. Returns the epoch the caller must attach to the
    /// scheduled clear.
    pub fn announce(&mut self, message: impl Into<String>) -> u64 {
        self.message = Some(message.into());
        self.epoch += 1;
        self.epoch
    }

    /// A scheduled clear fired. Only the clear belonging to the latest
    /// announcement takes effect.
    pub fn clear(&mut self, epoch: u64) -> bool {
        if epoch == self.epoch {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_then_clear() {
        let mut announcer = Announcer::default();
        let epoch = announcer.announce("Zoom enabled");
        assert_eq!(announcer.message(), Some("Zoom enabled"));

        assert!(announcer.clear(epoch));
        assert_eq!(announcer.message(), None);
    }

    #[test]
    fn test_newer_announcement_survives_stale_clear() {
        let mut announcer = Announcer::default();
        let first = announcer.announce("Opened modal for Demo");
        let _second = announcer.announce("Zoom enabled");

        // The first announcement's clear timer fires late
        assert!(!announcer.clear(first));
        assert_eq!(announcer.message(), Some("Zoom enabled"));
    }
}
