pub use self::{customer::*, equipment::*, rental::*};

mod customer;
mod equipment;
mod rental;
