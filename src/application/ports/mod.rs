//! Ports - Boundary interfaces between the simulation core and its host

pub mod outbound;
