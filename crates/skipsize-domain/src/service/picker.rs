//! Selection state for the skip size picker

use log::debug;

use crate::model::SizeRecord;
use crate::service::cards::{partition, SizeCard};

/// Callback invoked with the chosen size id on every accepted selection
pub type SelectCallback = Box<dyn FnMut(u32)>;

/// Result of a selection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Selection changed and the callback ran
    Selected(u32),
    /// The record was already selected; nothing happened
    Unchanged(u32),
    /// The record does not take heavy waste while the constraint is active
    RejectedHeavyWaste(u32),
    /// No loaded record has this id
    UnknownSize(u32),
}

impl SelectOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SelectOutcome::Selected(_) | SelectOutcome::Unchanged(_))
    }
}

/// Picker state: the fetched sizes, the selected id, and the heavy-waste flag.
///
/// `sizes` is filled once per picker lifetime. Once sizes are loaded, the
/// selected id is either `None` or the id of a loaded record the user is
/// allowed to pick; an initial id missing from the loaded list is dropped.
pub struct SizePicker {
    sizes: Vec<SizeRecord>,
    loaded: bool,
    selected_id: Option<u32>,
    has_heavy_waste: bool,
    on_select: SelectCallback,
}

impl SizePicker {
    pub fn new(on_select: impl FnMut(u32) + 'static) -> Self {
        Self {
            sizes: Vec::new(),
            loaded: false,
            selected_id: None,
            has_heavy_waste: false,
            on_select: Box::new(on_select),
        }
    }

    /// Preselect a size without invoking the callback
    pub fn with_initial_size(mut self, size: Option<u32>) -> Self {
        self.selected_id = size;
        self
    }

    pub fn with_heavy_waste(mut self, has_heavy_waste: bool) -> Self {
        self.has_heavy_waste = has_heavy_waste;
        self
    }

    /// Store the fetched sizes. Only the first load is kept; returns whether
    /// this call populated the picker.
    pub fn load_sizes(&mut self, sizes: Vec<SizeRecord>) -> bool {
        if self.loaded {
            debug!("Ignoring repeated size load ({} records)", sizes.len());
            return false;
        }
        self.sizes = sizes;
        self.loaded = true;
        self.enforce_selection_invariant();
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn sizes(&self) -> &[SizeRecord] {
        &self.sizes
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected_id
    }

    pub fn selected(&self) -> Option<&SizeRecord> {
        let id = self.selected_id?;
        self.sizes.iter().find(|r| r.id == id)
    }

    pub fn has_heavy_waste(&self) -> bool {
        self.has_heavy_waste
    }

    /// Change the heavy-waste constraint. The sizes are not fetched again.
    pub fn set_heavy_waste(&mut self, has_heavy_waste: bool) {
        self.has_heavy_waste = has_heavy_waste;
        self.enforce_selection_invariant();
    }

    /// Handle a user click on the card with `id`
    pub fn select(&mut self, id: u32) -> SelectOutcome {
        let Some(record) = self.sizes.iter().find(|r| r.id == id) else {
            return SelectOutcome::UnknownSize(id);
        };

        if !record.is_selectable(self.has_heavy_waste) {
            debug!("Size {} rejected: not suitable for heavy waste", id);
            return SelectOutcome::RejectedHeavyWaste(id);
        }

        if self.selected_id == Some(id) {
            return SelectOutcome::Unchanged(id);
        }

        self.selected_id = Some(id);
        (self.on_select)(id);
        SelectOutcome::Selected(id)
    }

    /// Records in display order: allowed first, then the disallowed partition
    pub fn display_order(&self) -> Vec<&SizeRecord> {
        let (mut allowed, not_allowed) = partition(&self.sizes, self.has_heavy_waste);
        allowed.extend(not_allowed);
        allowed
    }

    pub fn cards(&self) -> Vec<SizeCard> {
        self.display_order()
            .into_iter()
            .map(|r| SizeCard::from_record(r, self.selected_id, self.has_heavy_waste))
            .collect()
    }

    fn enforce_selection_invariant(&mut self) {
        if !self.loaded {
            return;
        }
        let Some(id) = self.selected_id else {
            return;
        };
        let keep = self
            .sizes
            .iter()
            .find(|r| r.id == id)
            .is_some_and(|r| r.is_selectable(self.has_heavy_waste));
        if !keep {
            debug!("Clearing selection {}: unknown or not suitable for heavy waste", id);
            self.selected_id = None;
        }
    }
}
