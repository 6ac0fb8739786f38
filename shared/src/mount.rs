//! One-shot mount flag driving the entrance transitions.

/// Whether the page has been presented yet.
///
/// Starts at [`MountState::NotMounted`] and moves to [`MountState::Mounted`]
/// exactly once. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    #[default]
    NotMounted,
    Mounted,
}

impl MountState {
    /// Record first presentation. Returns `true` only for the call that
    /// performed the transition.
    pub fn mount(&mut self) -> bool {
        match self {
            MountState::NotMounted => {
                *self = MountState::Mounted;
                true
            }
            MountState::Mounted => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, MountState::Mounted)
    }
}
