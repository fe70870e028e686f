//! Page window selection.
//!
//! Maps `(current, first, last)` to the contents of the five fixed slots
//! of a pagination control and to the visibility of its two ellipsis markers.

use serde::{Serialize, Deserialize};

/// Count of fixed slots in the control
pub const SLOT_COUNT: usize = 5;

/// Index of the slot that holds current page in the middle branch
pub const MIDDLE_SLOT: usize = 2;

/// Inclusive range of page numbers
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: u32,
    pub last: u32,
}

impl PageRange {
    /// Make range. Returns `None` if `first` is zero or `first > last`
    pub fn new(first: u32, last: u32) -> Option<Self> {
        (first >= 1 && first <= last).then_some(Self { first, last })
    }

    /// Whether all pages fit into the slots
    pub fn is_compact(&self) -> bool {
        self.last <= SLOT_COUNT as u32
    }
}

/// A single slot of the control
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Page number shown. `None` means the label is left as it is
    pub label: Option<u32>,
    pub active: bool,
    pub visible: bool,
}

impl Slot {
    /// Visible slot with page number `label`
    fn page(label: u32, current: u32) -> Self {
        Self { label: Some(label), active: label == current, visible: true }
    }

    /// Visible slot with page number `label` that is never checked for being active
    fn shortcut(label: u32) -> Self {
        Self { label: Some(label), active: false, visible: true }
    }

    fn hidden() -> Self {
        Self { label: None, active: false, visible: false }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipsisVisibility {
    pub show_leading: bool,
    pub show_trailing: bool,
}

impl EllipsisVisibility {
    pub const NONE: Self = Self { show_leading: false, show_trailing: false };
    pub const BOTH: Self = Self { show_leading: true, show_trailing: true };
}

/// How slot labels are handled when current page is in the middle of the range
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MiddleLabels {
    /// Only mark the middle slot active, labels stay as rendered before
    #[default]
    Keep,
    /// Label slots with `current - 2 ..= current + 2`
    Recompute,
}

/// Computed state of the control
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// All pages fit into slots, slots past `last` are hidden
    Compact {
        slots: [Slot; SLOT_COUNT],
    },
    /// Sliding window with shortcuts to first/last page
    Windowed {
        slots: [Slot; SLOT_COUNT],
        ellipsis: EllipsisVisibility,
    },
}

impl RenderInstruction {
    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        match self {
            Self::Compact { slots } | Self::Windowed { slots, .. } => slots,
        }
    }

    pub fn ellipsis(&self) -> EllipsisVisibility {
        match self {
            Self::Compact { .. } => EllipsisVisibility::NONE,
            Self::Windowed { ellipsis, .. } => *ellipsis,
        }
    }

    pub fn is_windowed(&self) -> bool {
        matches!(self, Self::Windowed { .. })
    }

    /// Index of the active slot, if any
    pub fn active_slot(&self) -> Option<usize> {
        self.slots().iter().position(|s| s.active)
    }
}

/// Compute control state, keeping middle labels untouched
pub fn compute(current: u32, first: u32, last: u32) -> RenderInstruction {
    compute_with(current, PageRange { first, last }, MiddleLabels::Keep)
}

/// Compute control state.
///
/// `current` is not validated: if it is outside of `range`, no slot will be active.
pub fn compute_with(current: u32, range: PageRange, middle: MiddleLabels) -> RenderInstruction {
    let PageRange { first, last } = range;

    if range.is_compact() {
        let slots = std::array::from_fn(|idx| {
            let page = idx as u32 + 1;
            if page <= last { Slot::page(page, current) } else { Slot::hidden() }
        });
        return RenderInstruction::Compact { slots };
    }

    let near_start = current <= first.saturating_add(2);
    let near_end = current >= last - 2;

    // Markers are checked independently of the label branch: a short range
    // can be near both ends at once and then shows neither
    let ellipsis = EllipsisVisibility {
        show_leading: !near_start,
        show_trailing: !near_end,
    };

    let slots = if near_start {
        std::array::from_fn(|idx| match idx {
            4 => Slot::shortcut(last),
            _ => Slot::page(first.saturating_add(idx as u32), current),
        })
    } else if near_end {
        std::array::from_fn(|idx| match idx {
            0 => Slot::shortcut(first),
            _ => Slot::page(last - 5 + idx as u32, current),
        })
    } else {
        std::array::from_fn(|idx| match middle {
            MiddleLabels::Keep => Slot { label: None, active: idx == MIDDLE_SLOT, visible: true },
            // Branch condition guarantees `current - 2 > first`
            MiddleLabels::Recompute => Slot::page(current - 2 + idx as u32, current),
        })
    };

    RenderInstruction::Windowed { slots, ellipsis }
}
