use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteState {
    Unmuted,
    Muted,
}

/// Edge-triggered mute gate.
///
/// Emits a command only when the classifier's verdict differs from the
/// current state, so holding a fist across many frames produces exactly
/// one `SetMute(true)`. There is no debounce: a single noisy frame can
/// flip the state. Adding hysteresis here is the obvious extension
/// point if that ever becomes a problem in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteGate {
    state: MuteState,
}

impl MuteGate {
    pub fn new() -> Self {
        Self {
            state: MuteState::Unmuted,
        }
    }

    /// Feed one classifier verdict. Returns the mute value to send to
    /// the audio sink, or `None` when the state already matches.
    pub fn observe(&mut self, is_fist: bool) -> Option<bool> {
        match (self.state, is_fist) {
            (MuteState::Unmuted, true) => {
                self.state = MuteState::Muted;
                info!("Mute transition: Unmuted → Muted");
                Some(true)
            }
            (MuteState::Muted, false) => {
                self.state = MuteState::Unmuted;
                info!("Mute transition: Muted → Unmuted");
                Some(false)
            }
            _ => None,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.state == MuteState::Muted
    }

    pub fn state(&self) -> MuteState {
        self.state
    }
}

impl Default for MuteGate {
    fn default() -> Self {
        Self::new()
    }
}
