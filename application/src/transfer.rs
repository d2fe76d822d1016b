pub use self::{customer::*, dashboard::*, equipment::*, rental::*};

mod customer;
mod dashboard;
mod equipment;
mod rental;
