pub use self::{customer::*, dashboard::*, equipment::*, expiry::*, rental::*};

mod customer;
mod dashboard;
mod equipment;
mod expiry;
mod rental;
