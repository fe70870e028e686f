pub mod prelude {
    pub use yew::prelude::*;
    pub use yew_router::prelude::*;
    pub use pagewin_common::*;
    pub use crate::route::*;
}

pub mod layout;
pub mod paginator;
