use serde::{Serialize, Deserialize};
use crate::{EllipsisVisibility, LayoutMode, LinkDescriptor};

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct PaginationRequest {
    pub current: u32,
    pub first: u32,
    pub last: u32,
    /// Current request path, used to build page links
    #[serde(default)]
    pub path: String,
    /// If absent, desktop layout is assumed
    #[serde(default)]
    pub viewport_width: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PaginationResponse {
    pub links: Vec<LinkDescriptor>,
    pub ellipsis: EllipsisVisibility,
    pub layout: LayoutMode,
    /// Whether windowed mode was used
    pub windowed: bool,
}
