pub mod claim_unlocked;
pub mod harvest;
pub mod initialize;
pub mod lock;
pub mod migrate;
pub mod perform;
pub mod voting;
pub mod withdraw;
pub mod xlt;

pub use claim_unlocked::*;
pub use harvest::*;
pub use initialize::*;
pub use lock::*;
pub use migrate::*;
pub use perform::*;
pub use voting::*;
pub use withdraw::*;
pub use xlt::*;
