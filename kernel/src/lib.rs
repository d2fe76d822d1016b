pub use crate::error::*;

mod entity;
mod error;
mod modify;
mod notify;
mod pricing;
mod query;
mod sweep;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
    pub mod pricing {
        pub use crate::pricing::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
    pub mod sweep {
        pub use crate::sweep::*;
    }
    pub mod notify {
        pub use crate::notify::*;
    }
}
