//! Snapshot forwarding between the rendering and order collaborators.

/// State of the snapshot slot.
///
/// `Failed` is a distinct sentinel: the render target produced no data for
/// a requested capture. It is surfaced to the UI collaborator and never
/// retried automatically, unlike `Pending` which simply means the capture
/// has not arrived yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Snapshot {
    /// No capture requested.
    #[default]
    Idle,
    /// Capture requested, no data yet.
    Pending,
    /// Capture succeeded; the core does not interpret the bytes.
    Ready(Vec<u8>),
    /// Capture failed.
    Failed,
}

impl Snapshot {
    /// Is a capture currently awaited?
    pub fn is_pending(&self) -> bool {
        matches!(self, Snapshot::Pending)
    }
}
