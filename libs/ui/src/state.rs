/// Snapshot of the host state the status widget renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    /// Battery charge in percent, 0..=100. Values above 100 are clamped.
    pub battery: u8,
    pub charging: bool,
}
