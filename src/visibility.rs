/// Edge-triggered "became visible" latch.
///
/// Hosts feed raw visibility (a key appearing or disappearing). Only the first
/// `false -> true` transition after construction or [`OnceVisible::reset`]
/// reports `true`.
#[derive(Debug, Default)]
pub struct OnceVisible {
    visible: bool,
    fired: bool,
}

impl OnceVisible {
    pub fn signal(&mut self, visible: bool) -> bool {
        let rising = visible && !self.visible;
        self.visible = visible;
        if rising && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Unmount: the next rising edge fires again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
