use serde::{Serialize, Deserialize};

/// Widest viewport that still gets mobile layout
pub const MOBILE_MAX_WIDTH: u32 = 678;

/// Layout variant of the control
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Mobile,
    #[default]
    Desktop,
}

impl LayoutMode {
    /// Select layout for viewport width
    pub fn select(viewport_width: u32) -> Self {
        Self::select_with(viewport_width, MOBILE_MAX_WIDTH)
    }

    /// Select layout for viewport width with custom breakpoint (inclusive towards mobile)
    pub fn select_with(viewport_width: u32, mobile_max_width: u32) -> Self {
        if viewport_width <= mobile_max_width {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

#[test]
fn test_layout_breakpoint() {
    assert_eq!(LayoutMode::select(0), LayoutMode::Mobile);
    assert_eq!(LayoutMode::select(678), LayoutMode::Mobile);
    assert_eq!(LayoutMode::select(679), LayoutMode::Desktop);
    assert_eq!(LayoutMode::select(1920), LayoutMode::Desktop);
    assert_eq!(LayoutMode::select_with(800, 1024), LayoutMode::Mobile);
}
