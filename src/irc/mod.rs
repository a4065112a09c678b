//! IRC layer: connection management and the outbound reply channel.

pub mod connection;
pub mod manager;
