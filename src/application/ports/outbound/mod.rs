//! Outbound ports - Interfaces that the simulation requires from the host

mod storage_port;

pub use storage_port::{DatabaseSourcePort, SaveStoragePort};
