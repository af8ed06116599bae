pub mod deposit;
pub mod initialize;
pub mod reconcile;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use reconcile::*;
pub use withdraw::*;
