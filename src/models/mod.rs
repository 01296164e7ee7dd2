pub mod enums;
pub mod filters;
pub mod inventory;
pub mod record;

pub use enums::*;
pub use filters::*;
pub use inventory::*;
pub use record::*;
