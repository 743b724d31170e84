use std::collections::BTreeSet;

use crate::data::lookup::{picker_results, PickerSection};
use crate::data::model::{Dataset, FileType};

// ---------------------------------------------------------------------------
// View vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Picker,
    Matrix,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Picker, Tab::Matrix];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Picker => "Find a Level of Service",
            Tab::Matrix => "Levels of Service Matrix",
        }
    }

    /// Id of the content panel the tab controls.
    pub fn panel_id(self) -> &'static str {
        match self {
            Tab::Picker => "los-picker",
            Tab::Matrix => "los-matrix",
        }
    }
}

/// One of the two picker dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    FileType,
    DataLevel,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::FileType, Dimension::DataLevel];

    pub fn title(self) -> &'static str {
        match self {
            Dimension::FileType => "File Type",
            Dimension::DataLevel => "Data Level",
        }
    }

    pub fn placeholder(self) -> String {
        format!("Pick a {}", self.title())
    }

    /// Id of the dropdown toggle, e.g. `file-type`.
    pub fn element_id(self) -> String {
        self.title().to_lowercase().replace(' ', "-")
    }
}

/// A value picked from one of the dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    FileType(FileType),
    DataLevel(usize),
}

impl Choice {
    pub fn label(self) -> String {
        match self {
            Choice::FileType(ft) => ft.to_string(),
            Choice::DataLevel(level) => level.to_string(),
        }
    }
}

/// Options offered by a dropdown: the fixed file types, or one entry per
/// data level of the dataset.
pub fn options(dimension: Dimension, dataset: &Dataset) -> Vec<Choice> {
    match dimension {
        Dimension::FileType => FileType::ALL.into_iter().map(Choice::FileType).collect(),
        Dimension::DataLevel => (0..dataset.level_count()).map(Choice::DataLevel).collect(),
    }
}

/// Position of a service in the dataset: `sections[section].services[service]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceId {
    pub section: usize,
    pub service: usize,
}

// ---------------------------------------------------------------------------
// Commands and the view state they drive
// ---------------------------------------------------------------------------

/// Every user interaction the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectTab(Tab),
    ToggleDropdown(Dimension),
    SelectOption(Choice),
    ToggleService(ServiceId),
}

/// Follow-up work requested by [`ViewState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Recompute,
}

/// Ephemeral UI state, independent of rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub tab: Tab,
    /// At most one dropdown menu is open at a time.
    pub open_dropdown: Option<Dimension>,
    pub file_type: Option<FileType>,
    pub data_level: Option<usize>,
    /// Matrix services whose table is shown.
    pub expanded: BTreeSet<ServiceId>,
}

impl ViewState {
    pub fn update(&mut self, command: Command) -> Effect {
        match command {
            Command::SelectTab(tab) => {
                self.tab = tab;
                self.open_dropdown = None;
                Effect::None
            }
            Command::ToggleDropdown(dimension) => {
                self.open_dropdown = if self.open_dropdown == Some(dimension) {
                    None
                } else {
                    Some(dimension)
                };
                Effect::None
            }
            Command::SelectOption(choice) => {
                match choice {
                    Choice::FileType(ft) => self.file_type = Some(ft),
                    Choice::DataLevel(level) => self.data_level = Some(level),
                }
                self.open_dropdown = None;
                Effect::Recompute
            }
            Command::ToggleService(id) => {
                if !self.expanded.remove(&id) {
                    self.expanded.insert(id);
                }
                Effect::None
            }
        }
    }

    /// Both selections, once neither dropdown shows its placeholder.
    pub fn selection(&self) -> Option<(FileType, usize)> {
        Some((self.file_type?, self.data_level?))
    }

    pub fn is_panel_visible(&self, tab: Tab) -> bool {
        self.tab == tab
    }

    pub fn is_dropdown_open(&self, dimension: Dimension) -> bool {
        self.open_dropdown == Some(dimension)
    }

    /// Toggle text: the placeholder until a value has been chosen.
    pub fn dropdown_label(&self, dimension: Dimension) -> String {
        let chosen = match dimension {
            Dimension::FileType => self.file_type.map(Choice::FileType),
            Dimension::DataLevel => self.data_level.map(Choice::DataLevel),
        };
        chosen
            .map(Choice::label)
            .unwrap_or_else(|| dimension.placeholder())
    }

    pub fn is_service_expanded(&self, id: ServiceId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn service_toggle_label(&self, id: ServiceId) -> &'static str {
        if self.is_service_expanded(id) {
            "Hide"
        } else {
            "Show"
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state: dataset, view state, and the last computed results.
#[derive(Debug, Default)]
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Dataset>,

    pub view: ViewState,

    /// Picker results from the last complete selection.
    pub results: Vec<PickerSection>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the view.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.view = ViewState::default();
        self.results.clear();
        self.status_message = None;
    }

    /// Record a failed load. Picker view, nothing selected, nothing rendered.
    pub fn set_load_error(&mut self, error: &anyhow::Error) {
        self.dataset = None;
        self.view = ViewState::default();
        self.results.clear();
        self.status_message = Some(format!("Error: {error:#}"));
    }

    pub fn apply(&mut self, command: Command) {
        log::debug!("applying {command:?}");
        if self.view.update(command) == Effect::Recompute {
            self.recompute();
        }
    }

    /// Refresh `results` once both dropdowns have a value; until then the
    /// previous results are left untouched.
    fn recompute(&mut self) {
        let (Some(dataset), Some((file_type, level))) = (&self.dataset, self.view.selection())
        else {
            return;
        };
        match picker_results(dataset, file_type, level) {
            Ok(results) => {
                log::debug!(
                    "recomputed {file_type} / level {level}: {} sections",
                    results.len()
                );
                self.results = results;
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("lookup failed: {e}");
                self.results.clear();
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;
    use crate::severity::Severity;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset());
        state
    }

    const MCC: ServiceId = ServiceId {
        section: 0,
        service: 0,
    };

    #[test]
    fn initial_state_shows_picker_with_placeholders() {
        let state = loaded();
        assert!(state.view.is_panel_visible(Tab::Picker));
        assert!(!state.view.is_panel_visible(Tab::Matrix));
        assert_eq!(state.view.dropdown_label(Dimension::FileType), "Pick a File Type");
        assert_eq!(state.view.dropdown_label(Dimension::DataLevel), "Pick a Data Level");
        assert!(state.results.is_empty());
    }

    #[test]
    fn both_selections_render_results() {
        let mut state = loaded();
        state.apply(Command::SelectOption(Choice::FileType(FileType::Hdf5)));
        state.apply(Command::SelectOption(Choice::DataLevel(2)));
        assert_eq!(state.view.dropdown_label(Dimension::FileType), "HDF5");
        assert_eq!(state.view.dropdown_label(Dimension::DataLevel), "2");
        let cell = &state.results[0].rows[0].cell;
        assert_eq!(cell.label, "Full support");
        assert_eq!(cell.severity, Severity::Success);
    }

    #[test]
    fn partial_selection_is_a_no_op() {
        let mut state = loaded();
        state.apply(Command::SelectOption(Choice::FileType(FileType::Hdf5)));
        assert!(state.results.is_empty());

        state.apply(Command::SelectOption(Choice::DataLevel(2)));
        let before = state.results.clone();
        assert!(!before.is_empty());

        // With one side unset again, a selection neither renders nor clears.
        state.view.data_level = None;
        state.apply(Command::SelectOption(Choice::FileType(FileType::Ascii)));
        assert_eq!(state.results, before);
    }

    #[test]
    fn reselecting_same_pair_is_idempotent() {
        let mut state = loaded();
        state.apply(Command::SelectOption(Choice::FileType(FileType::NetCdf)));
        state.apply(Command::SelectOption(Choice::DataLevel(3)));
        let first = state.results.clone();
        state.apply(Command::SelectOption(Choice::FileType(FileType::NetCdf)));
        state.apply(Command::SelectOption(Choice::DataLevel(3)));
        assert_eq!(state.results, first);
    }

    #[test]
    fn new_selection_replaces_previous_results() {
        let mut state = loaded();
        state.apply(Command::SelectOption(Choice::FileType(FileType::Binary)));
        state.apply(Command::SelectOption(Choice::DataLevel(0)));
        state.apply(Command::SelectOption(Choice::DataLevel(4)));
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.results[0].rows[0].cell.severity, Severity::Warning);
    }

    #[test]
    fn service_toggle_twice_restores_hidden_show() {
        let mut state = loaded();
        assert_eq!(state.view.service_toggle_label(MCC), "Show");
        state.apply(Command::ToggleService(MCC));
        assert!(state.view.is_service_expanded(MCC));
        assert_eq!(state.view.service_toggle_label(MCC), "Hide");
        state.apply(Command::ToggleService(MCC));
        assert!(!state.view.is_service_expanded(MCC));
        assert_eq!(state.view.service_toggle_label(MCC), "Show");
    }

    #[test]
    fn service_toggles_are_independent() {
        let mut state = loaded();
        let other = ServiceId {
            section: 1,
            service: 0,
        };
        state.apply(Command::ToggleService(MCC));
        state.apply(Command::ToggleService(other));
        assert!(state.view.is_service_expanded(MCC));
        assert!(state.view.is_service_expanded(other));
        state.apply(Command::ToggleService(MCC));
        assert!(state.view.is_service_expanded(other));
    }

    #[test]
    fn exactly_one_panel_visible_after_tab_switches() {
        let mut state = loaded();
        for tab in [Tab::Matrix, Tab::Matrix, Tab::Picker, Tab::Matrix] {
            state.apply(Command::SelectTab(tab));
            let visible = Tab::ALL
                .iter()
                .filter(|&&t| state.view.is_panel_visible(t))
                .count();
            assert_eq!(visible, 1);
            assert!(state.view.is_panel_visible(tab));
        }
    }

    #[test]
    fn opening_a_dropdown_closes_the_other() {
        let mut state = loaded();
        state.apply(Command::ToggleDropdown(Dimension::FileType));
        assert!(state.view.is_dropdown_open(Dimension::FileType));
        state.apply(Command::ToggleDropdown(Dimension::DataLevel));
        assert!(state.view.is_dropdown_open(Dimension::DataLevel));
        assert!(!state.view.is_dropdown_open(Dimension::FileType));
        state.apply(Command::ToggleDropdown(Dimension::DataLevel));
        assert_eq!(state.view.open_dropdown, None);
    }

    #[test]
    fn selecting_or_switching_tab_closes_menu() {
        let mut state = loaded();
        state.apply(Command::ToggleDropdown(Dimension::FileType));
        state.apply(Command::SelectOption(Choice::FileType(FileType::Hdf4)));
        assert_eq!(state.view.open_dropdown, None);

        state.apply(Command::ToggleDropdown(Dimension::DataLevel));
        state.apply(Command::SelectTab(Tab::Matrix));
        assert_eq!(state.view.open_dropdown, None);
    }

    #[test]
    fn data_level_options_follow_indices() {
        let ds = sample_dataset();
        let levels = options(Dimension::DataLevel, &ds);
        assert_eq!(levels.len(), ds.indices.len());
        assert_eq!(levels[0].label(), "0");
        assert_eq!(options(Dimension::FileType, &ds).len(), 5);
        assert_eq!(Dimension::DataLevel.element_id(), "data-level");
    }

    #[test]
    fn load_error_leaves_picker_unset() {
        let mut state = loaded();
        state.apply(Command::SelectTab(Tab::Matrix));
        state.apply(Command::SelectOption(Choice::FileType(FileType::Hdf5)));
        state.set_load_error(&anyhow::anyhow!("parsing dataset JSON"));
        assert!(state.dataset.is_none());
        assert_eq!(state.view, ViewState::default());
        assert!(state.results.is_empty());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Error: parsing dataset JSON")
        );
    }

    #[test]
    fn lookup_failure_surfaces_message() {
        let mut state = loaded();
        state.apply(Command::SelectOption(Choice::FileType(FileType::Hdf5)));
        state.apply(Command::SelectOption(Choice::DataLevel(42)));
        assert!(state.results.is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn valid_selection_after_failed_lookup_clears_message() {
        let mut state = loaded();
        state.apply(Command::SelectOption(Choice::FileType(FileType::Hdf5)));
        state.apply(Command::SelectOption(Choice::DataLevel(42)));
        assert!(state.status_message.is_some());

        state.apply(Command::SelectOption(Choice::DataLevel(2)));
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.status_message, None);
    }
}
