//! Named actions the host can invoke

/// Completion handle passed with every invocation
///
/// The host keeps the invoking control busy until [`completed`] is called,
/// so it must be called exactly once per invocation, on success or failure.
///
/// [`completed`]: ActionEvent::completed
pub trait ActionEvent {
    /// Signal that the action has finished
    fn completed(&mut self);
}

impl<E: ActionEvent + ?Sized> ActionEvent for &mut E {
    fn completed(&mut self) {
        (**self).completed()
    }
}

/// Counts completion signals
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompletionFlag {
    count: usize,
}

impl CompletionFlag {
    /// Not yet completed
    pub fn new() -> Self {
        Self::default()
    }

    /// True once `completed` has been called
    pub fn is_completed(&self) -> bool {
        self.count > 0
    }

    /// Number of `completed` calls
    pub fn count(&self) -> usize {
        self.count
    }
}

impl ActionEvent for CompletionFlag {
    fn completed(&mut self) {
        self.count += 1;
    }
}

/// What a registered trigger does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TriggerAction {
    /// Find, style and report citations
    RunPipeline,
    /// Only open the task pane
    ShowPane,
}

/// Name of the trigger registered by [`AddIn::with_default_triggers`]
///
/// [`AddIn::with_default_triggers`]: crate::AddIn::with_default_triggers
pub const RUN_TRIGGER: &str = "run";

/// Name of the pane trigger registered by [`AddIn::with_default_triggers`]
///
/// [`AddIn::with_default_triggers`]: crate::AddIn::with_default_triggers
pub const SHOW_PANE_TRIGGER: &str = "action";
