mod atomic;
mod interface;
mod inventory;
mod lock;
mod sync;

pub use atomic::*;
pub use interface::*;
pub use inventory::*;
pub use lock::*;
