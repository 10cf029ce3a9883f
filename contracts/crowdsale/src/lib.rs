#![no_std]

mod contract;
mod errors;
mod storage;
mod types;


pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use errors::Error;
pub use types::SaleConfig;
