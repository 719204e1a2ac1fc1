use crate::color::MethodColors;
use crate::data::model::{ConvergenceData, METHOD_COUNT};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a results file is loaded).
    pub dataset: Option<ConvergenceData>,

    /// Per-method visibility toggles, indexed like `METHOD_LABELS`.
    pub visible: [bool; METHOD_COUNT],

    /// Fixed per-method colours.
    pub colors: MethodColors,

    /// Plot squared error on a log10 axis.
    pub log_scale: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            visible: [true; METHOD_COUNT],
            colors: MethodColors::new(),
            log_scale: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, replacing the previous one whole.
    pub fn set_dataset(&mut self, dataset: ConvergenceData) {
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Flip visibility of a single method series.
    pub fn toggle_method(&mut self, index: usize) {
        if let Some(v) = self.visible.get_mut(index) {
            *v = !*v;
        }
    }

    /// Show every method series.
    pub fn show_all(&mut self) {
        self.visible = [true; METHOD_COUNT];
    }

    /// Hide every method series.
    pub fn hide_all(&mut self) {
        self.visible = [false; METHOD_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_results;

    #[test]
    fn set_dataset_clears_a_stale_error() {
        let mut state = AppState::default();
        state.status_message = Some("Error: old".into());

        state.set_dataset(parse_results("10 0.1 0.2 0.3 0.4\n").unwrap());

        assert!(state.status_message.is_none());
        assert_eq!(state.dataset.as_ref().map(|d| d.len()), Some(1));
    }

    #[test]
    fn toggling_flips_only_the_given_method() {
        let mut state = AppState::default();
        state.toggle_method(2);
        assert_eq!(state.visible, [true, true, false, true]);

        state.toggle_method(2);
        assert_eq!(state.visible, [true; METHOD_COUNT]);

        // Out of range is a no-op.
        state.toggle_method(METHOD_COUNT);
        assert_eq!(state.visible, [true; METHOD_COUNT]);
    }

    #[test]
    fn show_and_hide_all() {
        let mut state = AppState::default();
        state.hide_all();
        assert_eq!(state.visible, [false; METHOD_COUNT]);
        state.show_all();
        assert_eq!(state.visible, [true; METHOD_COUNT]);
    }
}
