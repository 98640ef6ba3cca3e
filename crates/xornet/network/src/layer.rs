use crate::error::{NetworkError, NetworkResult};
use crate::mutation::{perturb_mask, should_mutate};
use crate::register::InputRegister;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A connection from one element of the previous layer to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Index into the previous layer's output. Fixed at construction.
    pub source_index: usize,
    pub and_mask: u8,
    pub xor_mask: u8,
}

impl Edge {
    pub fn new(source_index: usize, and_mask: u8, xor_mask: u8) -> Self {
        Self {
            source_index,
            and_mask,
            xor_mask,
        }
    }

    /// Contribution of this edge given the previous layer's output.
    #[inline]
    pub fn apply(&self, left: &[u8]) -> u8 {
        (left[self.source_index] & self.and_mask) ^ self.xor_mask
    }

    fn mutate<R: Rng + ?Sized>(&mut self, rarity: u32, rng: &mut R) {
        if should_mutate(rarity, rng) {
            self.and_mask = perturb_mask(self.and_mask, rng);
        }
        if should_mutate(rarity, rng) {
            self.xor_mask = perturb_mask(self.xor_mask, rng);
        }
    }
}

/// One output element of an inferred layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub inputs: Vec<Edge>,
}

impl Node {
    pub fn new(inputs: Vec<Edge>) -> Self {
        Self { inputs }
    }

    /// XOR-fold of every edge contribution.
    pub fn evaluate(&self, left: &[u8]) -> u8 {
        self.inputs.iter().fold(0u8, |acc, edge| acc ^ edge.apply(left))
    }
}

/// A stage of computation in a network chain.
#[derive(Clone, Debug)]
pub enum Layer {
    /// Raw input buffer; no trainable state.
    Static(InputRegister),
    /// Output derived from the layer on its left.
    Inferred(InferredLayer),
}

impl Layer {
    pub fn size(&self) -> usize {
        match self {
            Layer::Static(register) => register.width(),
            Layer::Inferred(layer) => layer.size(),
        }
    }

    pub fn values(&self) -> Vec<u8> {
        match self {
            Layer::Static(register) => register.snapshot(),
            Layer::Inferred(layer) => layer.values(),
        }
    }

    /// Static leaves are never mutated.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rarity: u32, rng: &mut R) {
        if let Layer::Inferred(layer) = self {
            layer.mutate(rarity, rng);
        }
    }

    /// The register at the bottom of the chain.
    pub fn register(&self) -> &InputRegister {
        match self {
            Layer::Static(register) => register,
            Layer::Inferred(layer) => layer.left.register(),
        }
    }

    /// Number of inferred layers in the chain starting here.
    pub fn depth(&self) -> usize {
        match self {
            Layer::Static(_) => 0,
            Layer::Inferred(layer) => 1 + layer.left.depth(),
        }
    }
}

/// A layer whose output is computed from `left` through its nodes.
///
/// `left` is exclusively owned, so cloning gives an independent chain down
/// to the shared [`InputRegister`].
#[derive(Clone, Debug)]
pub struct InferredLayer {
    nodes: Vec<Node>,
    left: Box<Layer>,
}

impl InferredLayer {
    /// Build a layer from explicit nodes. Every edge must point inside
    /// `left`.
    pub fn from_nodes(left: Layer, nodes: Vec<Node>) -> NetworkResult<Self> {
        let left_size = left.size();
        if let Some(edge) = nodes
            .iter()
            .flat_map(|n| n.inputs.iter())
            .find(|e| e.source_index >= left_size)
        {
            return Err(NetworkError::SourceOutOfRange {
                index: edge.source_index,
                left_size,
            });
        }
        Ok(Self {
            nodes,
            left: Box::new(left),
        })
    }

    /// Fully connected layer of `size` nodes with random masks.
    ///
    /// All masks come from one bulk fill, two bytes per edge.
    pub fn fully_connected<R: Rng + ?Sized>(left: Layer, size: usize, rng: &mut R) -> Self {
        let left_size = left.size();
        if left_size == 0 {
            return Self {
                nodes: vec![Node::default(); size],
                left: Box::new(left),
            };
        }

        let mut masks = vec![0u8; size * left_size * 2];
        rng.fill_bytes(&mut masks);

        let nodes = masks
            .chunks_exact(left_size * 2)
            .map(|node_masks| {
                Node::new(
                    node_masks
                        .chunks_exact(2)
                        .enumerate()
                        .map(|(j, pair)| Edge::new(j, pair[0], pair[1]))
                        .collect(),
                )
            })
            .collect();

        Self {
            nodes,
            left: Box::new(left),
        }
    }

    /// Fully connected layer with every mask fixed.
    pub fn uniform(left: Layer, size: usize, and_mask: u8, xor_mask: u8) -> Self {
        let left_size = left.size();
        let node = Node::new(
            (0..left_size)
                .map(|j| Edge::new(j, and_mask, xor_mask))
                .collect(),
        );
        Self {
            nodes: vec![node; size],
            left: Box::new(left),
        }
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn left(&self) -> &Layer {
        &self.left
    }

    /// Forward evaluation of the whole chain.
    pub fn values(&self) -> Vec<u8> {
        let left = self.left.values();
        self.nodes.iter().map(|node| node.evaluate(&left)).collect()
    }

    /// Perturb every edge of this layer and every inferred layer below it.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rarity: u32, rng: &mut R) {
        for edge in self.nodes.iter_mut().flat_map(|n| n.inputs.iter_mut()) {
            edge.mutate(rarity, rng);
        }
        self.left.mutate(rarity, rng);
    }

    pub(crate) fn edge_count(&self) -> usize {
        let own: usize = self.nodes.iter().map(|n| n.inputs.len()).sum();
        own + match self.left.as_ref() {
            Layer::Static(_) => 0,
            Layer::Inferred(layer) => layer.edge_count(),
        }
    }

    pub(crate) fn into_layer(self) -> Layer {
        Layer::Inferred(self)
    }
}
