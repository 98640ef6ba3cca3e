#![deny(unsafe_code)]
//! # xornet-network
//!
//! Bitwise feed-forward networks: layers of nodes whose edges combine the
//! previous layer's bytes with an AND mask and an XOR mask instead of a
//! numeric weight.
//!
//! A [`Network`] is an owned chain of [`InferredLayer`]s ending in a shared
//! [`InputRegister`]. Cloning a network deep-copies its edges and shares the
//! register; mutation walks the chain and leaves the register alone.

pub mod error;
pub mod layer;
pub mod mutation;
pub mod network;
pub mod register;

pub use error::{NetworkError, NetworkResult};
pub use layer::{Edge, InferredLayer, Layer, Node};
pub use network::Network;
pub use register::InputRegister;
