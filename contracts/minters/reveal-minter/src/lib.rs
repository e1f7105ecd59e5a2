pub mod allowance;
pub mod contract;
pub mod error;
pub mod exchange;
pub mod gate;
pub mod inventory;
pub mod msg;
pub mod stage;
pub mod state;
pub mod utils;
