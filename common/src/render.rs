//! Bridge between computed control state and whatever draws it

use serde::{Serialize, Deserialize};

use crate::{
    layout::LayoutMode,
    path::PagePath,
    window::{compute_with, EllipsisVisibility, MiddleLabels, PageRange, RenderInstruction, SLOT_COUNT},
};

/// What a renderer should do with a single slot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkDescriptor {
    /// `None` if label and href are left as they are
    pub label: Option<u32>,
    pub href: Option<String>,
    pub active: bool,
    pub visible: bool,
}

/// Something that draws the control
pub trait Renderer {
    /// Update all slots. `links` always contains [SLOT_COUNT] entries
    fn render_links(&mut self, links: &[LinkDescriptor]);
    fn render_ellipsis(&mut self, ellipsis: EllipsisVisibility);
    fn render_layout(&mut self, mode: LayoutMode);
}

impl RenderInstruction {
    /// Make link descriptors for every slot
    pub fn links(&self, path: &PagePath) -> Vec<LinkDescriptor> {
        self.slots()
            .iter()
            .map(|slot| LinkDescriptor {
                label: slot.label,
                href: slot.label.map(|page| path.href(page)),
                active: slot.active,
                visible: slot.visible,
            })
            .collect()
    }
}

/// Pagination control inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub current: u32,
    pub range: PageRange,
    pub path: PagePath,
    pub middle: MiddleLabels,
}

impl Pagination {
    pub fn new(current: u32, range: PageRange, current_path: &str) -> Self {
        Self {
            current,
            range,
            path: PagePath::from_current(current_path),
            middle: MiddleLabels::default(),
        }
    }

    pub fn with_middle_labels(mut self, middle: MiddleLabels) -> Self {
        self.middle = middle;
        self
    }

    pub fn instruction(&self) -> RenderInstruction {
        compute_with(self.current, self.range, self.middle)
    }

    /// Push control state into renderer: links, then ellipsis, then layout
    pub fn render<R: Renderer>(&self, renderer: &mut R, layout: LayoutMode) {
        let instr = self.instruction();
        renderer.render_links(&instr.links(&self.path));
        renderer.render_ellipsis(instr.ellipsis());
        renderer.render_layout(layout);
    }
}

/// A drawn slot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub label: u32,
    pub href: String,
    pub active: bool,
    pub visible: bool,
}

/// Retained state of the control, as seen on a page.
///
/// Starts from the template a server would render and applies
/// whatever the renderer is told to change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaginatorState {
    pub slots: [SlotView; SLOT_COUNT],
    pub ellipsis: EllipsisVisibility,
    pub layout: LayoutMode,
}

impl PaginatorState {
    /// Initial template: shortcuts to first and last page around `current` and its neighbours,
    /// nothing active, both ellipses shown
    pub fn template(current: u32, range: PageRange, path: &PagePath) -> Self {
        let PageRange { first, last } = range;
        // Ranges built by hand may have `first > last`, so no `clamp` here
        let labels = [
            first,
            current.saturating_sub(1),
            current,
            current.saturating_add(1),
            last,
        ]
        .map(|page| page.max(first).min(last));

        Self {
            slots: labels.map(|label| SlotView { 
                label, 
                href: path.href(label), 
                active: false, 
                visible: true 
            }),
            ellipsis: EllipsisVisibility::BOTH,
            layout: LayoutMode::default(),
        }
    }

    /// Build template and render pagination into it
    pub fn rendered(pagination: &Pagination, layout: LayoutMode) -> Self {
        let mut state = Self::template(pagination.current, pagination.range, &pagination.path);
        pagination.render(&mut state, layout);
        state
    }

    /// Re-evaluate layout for a new viewport width
    pub fn resize(&mut self, viewport_width: u32, mobile_max_width: u32) {
        self.render_layout(LayoutMode::select_with(viewport_width, mobile_max_width));
    }

    pub fn visible_slots(&self) -> impl Iterator<Item = &SlotView> {
        self.slots.iter().filter(|s| s.visible)
    }
}

impl Renderer for PaginatorState {
    fn render_links(&mut self, links: &[LinkDescriptor]) {
        for (slot, link) in self.slots.iter_mut().zip(links) {
            if let (Some(label), Some(href)) = (link.label, &link.href) {
                slot.label = label;
                slot.href = href.clone();
            }
            slot.active = link.active;
            slot.visible = link.visible;
        }
    }

    fn render_ellipsis(&mut self, ellipsis: EllipsisVisibility) {
        self.ellipsis = ellipsis;
    }

    fn render_layout(&mut self, mode: LayoutMode) {
        self.layout = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls in order
    #[derive(Default)]
    struct Recorder(Vec<&'static str>, Vec<LinkDescriptor>);

    impl Renderer for Recorder {
        fn render_links(&mut self, links: &[LinkDescriptor]) {
            self.0.push("links");
            self.1 = links.to_vec();
        }
        fn render_ellipsis(&mut self, _: EllipsisVisibility) {
            self.0.push("ellipsis");
        }
        fn render_layout(&mut self, _: LayoutMode) {
            self.0.push("layout");
        }
    }

    fn pagination(current: u32, first: u32, last: u32, path: &str) -> Pagination {
        Pagination::new(current, PageRange::new(first, last).unwrap(), path)
    }

    #[test]
    fn render_order_and_links() {
        let mut rec = Recorder::default();
        pagination(1, 1, 20, "?keywords=rust").render(&mut rec, LayoutMode::Mobile);

        assert_eq!(rec.0, ["links", "ellipsis", "layout"]);
        assert_eq!(rec.1.len(), SLOT_COUNT);
        assert_eq!(rec.1[0], LinkDescriptor {
            label: Some(1),
            href: Some("?keywords=rust&page=1".into()),
            active: true,
            visible: true,
        });
        assert_eq!(rec.1[4].href.as_deref(), Some("?keywords=rust&page=20"));
    }

    #[test]
    fn middle_keeps_template_labels() {
        let state = PaginatorState::rendered(&pagination(10, 1, 20, "/"), LayoutMode::Desktop);
        let labels: Vec<_> = state.slots.iter().map(|s| s.label).collect();
        assert_eq!(labels, [1, 9, 10, 11, 20]);
        assert!(state.slots[2].active);
        assert_eq!(state.slots[2].href, "?page=10");
        assert_eq!(state.ellipsis, EllipsisVisibility::BOTH);
    }

    #[test]
    fn template_tolerates_inverted_range() {
        let range = PageRange { first: 5, last: 2 };
        let state = PaginatorState::template(3, range, &PagePath::default());
        assert!(state.slots.iter().all(|s| s.label == 2));
    }

    #[test]
    fn compact_hides_extra_slots() {
        let state = PaginatorState::rendered(&pagination(2, 1, 3, "/"), LayoutMode::Desktop);
        let labels: Vec<_> = state.visible_slots().map(|s| s.label).collect();
        assert_eq!(labels, [1, 2, 3]);
        assert!(state.slots[1].active);
        assert_eq!(state.ellipsis, EllipsisVisibility::NONE);
    }

    #[test]
    fn near_end_state() {
        let state = PaginatorState::rendered(&pagination(19, 1, 20, "/"), LayoutMode::Desktop);
        let labels: Vec<_> = state.slots.iter().map(|s| s.label).collect();
        assert_eq!(labels, [1, 16, 17, 18, 19]);
        assert!(state.slots[4].active);
        assert!(state.ellipsis.show_leading && !state.ellipsis.show_trailing);
    }

    #[test]
    fn resize_only_changes_layout() {
        let mut state = PaginatorState::rendered(&pagination(1, 1, 20, "/"), LayoutMode::Desktop);
        let before = state.clone();

        state.resize(500, crate::layout::MOBILE_MAX_WIDTH);
        assert_eq!(state.layout, LayoutMode::Mobile);
        assert_eq!(state.slots, before.slots);

        state.resize(1200, crate::layout::MOBILE_MAX_WIDTH);
        assert_eq!(state.layout, LayoutMode::Desktop);
    }
}
