use state_actor::TaskId;

/// Visibility of a modal that appears some time after being requested.
///
/// At most one reveal is pending at a time. `hide` is immediate and hands back the
/// pending reveal, if any, so the owner can cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalGate {
    visible: bool,
    pending: Option<TaskId>,
}

impl ModalGate {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// `false` when a reveal is already pending or the modal is already shown.
    pub fn accepts_show(&self) -> bool {
        !self.visible && self.pending.is_none()
    }

    pub fn arm(&mut self, reveal: TaskId) {
        self.pending = Some(reveal);
    }

    pub fn reveal(&mut self) {
        self.pending = None;
        self.visible = true;
    }

    pub fn hide(&mut self) -> Option<TaskId> {
        self.visible = false;
        self.pending.take()
    }
}
