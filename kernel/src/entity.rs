pub use self::{common::*, customer::*, dashboard::*, equipment::*, rental::*};

mod common;
mod customer;
mod dashboard;
mod equipment;
mod rental;
