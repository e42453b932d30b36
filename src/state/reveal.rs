/// Card reveal state machine
///
/// Each card moves through `Hidden → Appearing → Showing` on the show path
/// and `Showing → Hiding → Hidden` on the hide path. The in-between states
/// exist so the fade transition can play: an `Appearing` or `Hiding` card
/// still participates in layout, a `Hidden` card does not.
///
/// Completions (the end of a stagger delay or fade) arrive later as
/// messages carrying the epoch that was current when they were scheduled.
/// Bumping the epoch on every new transition invalidates whatever was still
/// pending, so a rapid show-after-hide can never be yanked out of layout by
/// a stale hide completion.

/// Where a card currently sits in its show/hide lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not rendered at all (out of layout).
    Hidden,
    /// In layout, fading in, stagger delay still running.
    Appearing,
    /// Fully visible.
    Showing,
    /// In layout, fading out, waiting for the transition to finish.
    Hiding,
}

impl Visibility {
    /// Whether the card occupies space in the grid.
    pub fn in_layout(self) -> bool {
        self != Visibility::Hidden
    }

    /// Whether the card is rendered dimmed (mid-transition).
    pub fn is_transitional(self) -> bool {
        matches!(self, Visibility::Appearing | Visibility::Hiding)
    }
}

/// Per-card reveal state: the visibility plus the epoch guarding pending
/// completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    visibility: Visibility,
    epoch: u64,
}

impl RevealState {
    pub fn hidden() -> Self {
        RevealState {
            visibility: Visibility::Hidden,
            epoch: 0,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Start the show path. Returns the epoch to attach to the scheduled
    /// `shown` completion, or `None` when the card is already showing (or
    /// on its way there) and only needs reaffirming.
    ///
    /// Starting a show also invalidates any pending hide completion.
    pub fn begin_show(&mut self) -> Option<u64> {
        match self.visibility {
            Visibility::Showing | Visibility::Appearing => None,
            Visibility::Hidden | Visibility::Hiding => {
                self.epoch += 1;
                self.visibility = Visibility::Appearing;
                Some(self.epoch)
            }
        }
    }

    /// Start the hide path. Returns the epoch for the scheduled
    /// `hide finished` completion, or `None` when already hidden or hiding.
    pub fn begin_hide(&mut self) -> Option<u64> {
        match self.visibility {
            Visibility::Hidden | Visibility::Hiding => None,
            Visibility::Showing | Visibility::Appearing => {
                self.epoch += 1;
                self.visibility = Visibility::Hiding;
                Some(self.epoch)
            }
        }
    }

    /// A scheduled show completion fired. Stale epochs fall through without
    /// effect.
    pub fn complete_show(&mut self, epoch: u64) -> bool {
        if epoch == self.epoch && self.visibility == Visibility::Appearing {
            self.visibility = Visibility::Showing;
            true
        } else {
            false
        }
    }

    /// A scheduled hide completion fired: take the card out of layout,
    /// unless a newer transition superseded it.
    pub fn complete_hide(&mut self, epoch: u64) -> bool {
        if epoch == self.epoch && self.visibility == Visibility::Hiding {
            self.visibility = Visibility::Hidden;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_path_reaches_showing() {
        let mut state = RevealState::hidden();
        let epoch = state.begin_show().expect("hidden card schedules a show");
        assert_eq!(state.visibility(), Visibility::Appearing);
        assert!(state.visibility().in_layout());

        assert!(state.complete_show(epoch));
        assert_eq!(state.visibility(), Visibility::Showing);
    }

    #[test]
    fn test_show_on_showing_card_is_a_noop() {
        let mut state = RevealState::hidden();
        let epoch = state.begin_show().unwrap();
        state.complete_show(epoch);

        assert_eq!(state.begin_show(), None);
        assert_eq!(state.visibility(), Visibility::Showing);
    }

    #[test]
    fn test_hide_path_leaves_layout_only_after_completion() {
        let mut state = RevealState::hidden();
        let epoch = state.begin_show().unwrap();
        state.complete_show(epoch);

        let hide_epoch = state.begin_hide().unwrap();
        assert_eq!(state.visibility(), Visibility::Hiding);
        assert!(state.visibility().in_layout());

        assert!(state.complete_hide(hide_epoch));
        assert_eq!(state.visibility(), Visibility::Hidden);
        assert!(!state.visibility().in_layout());
    }

    #[test]
    fn test_show_during_hide_cancels_pending_hide_completion() {
        let mut state = RevealState::hidden();
        let epoch = state.begin_show().unwrap();
        state.complete_show(epoch);

        let stale_hide = state.begin_hide().unwrap();
        // A show arrives before the fade-out finishes
        let show_epoch = state.begin_show().unwrap();
        assert_eq!(state.visibility(), Visibility::Appearing);

        // The old hide completion fires late and must be ignored
        assert!(!state.complete_hide(stale_hide));
        assert_eq!(state.visibility(), Visibility::Appearing);

        assert!(state.complete_show(show_epoch));
        assert_eq!(state.visibility(), Visibility::Showing);
    }

    #[test]
    fn test_hide_on_hidden_card_is_a_noop() {
        let mut state = RevealState::hidden();
        assert_eq!(state.begin_hide(), None);
        assert_eq!(state.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_stale_show_completion_is_ignored_after_hide() {
        let mut state = RevealState::hidden();
        let stale_show = state.begin_show().unwrap();
        state.complete_show(stale_show);

        state.begin_hide().unwrap();
        assert!(!state.complete_show(stale_show));
        assert_eq!(state.visibility(), Visibility::Hiding);
    }
}
