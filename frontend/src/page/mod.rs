mod prelude {
    pub use crate::component::prelude::*;
}

pub mod index;
