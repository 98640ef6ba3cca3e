use crate::error::{NetworkError, NetworkResult};
use crate::layer::{InferredLayer, Layer};
use crate::register::InputRegister;
use rand::Rng;

/// A chain of inferred layers over a shared input register.
///
/// The network's width is the node count of its outermost layer. Cloning a
/// network deep-copies every edge and shares only the register.
#[derive(Clone, Debug)]
pub struct Network {
    output: InferredLayer,
}

impl Network {
    /// Randomly initialised, fully connected network. `widths` lists layer
    /// sizes from the input side outwards; the last entry is the output width.
    /// Fails with [`NetworkError::NoLayers`] if `widths` is empty.
    pub fn random<R: Rng + ?Sized>(
        register: &InputRegister,
        widths: &[usize],
        rng: &mut R,
    ) -> NetworkResult<Self> {
        Self::build(register, widths, |left, size| {
            InferredLayer::fully_connected(left, size, &mut *rng)
        })
    }

    /// Fully connected network with every edge set to the same masks.
    pub fn uniform(
        register: &InputRegister,
        widths: &[usize],
        and_mask: u8,
        xor_mask: u8,
    ) -> NetworkResult<Self> {
        Self::build(register, widths, |left, size| {
            InferredLayer::uniform(left, size, and_mask, xor_mask)
        })
    }

    pub fn from_layer(output: InferredLayer) -> Self {
        Self { output }
    }

    fn build<F>(register: &InputRegister, widths: &[usize], mut make: F) -> NetworkResult<Self>
    where
        F: FnMut(Layer, usize) -> InferredLayer,
    {
        let (&last, hidden) = widths.split_last().ok_or(NetworkError::NoLayers)?;
        let mut left = Layer::Static(register.clone());
        for &width in hidden {
            left = make(left, width).into_layer();
        }
        Ok(Self {
            output: make(left, last),
        })
    }

    /// Output width.
    pub fn size(&self) -> usize {
        self.output.size()
    }

    /// Forward-evaluate against the register's current contents.
    pub fn values(&self) -> Vec<u8> {
        self.output.values()
    }

    /// In-place mutation of every inferred layer. Apply only to a network
    /// no other population slot refers to, i.e. after cloning.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rarity: u32, rng: &mut R) {
        self.output.mutate(rarity, rng);
    }

    pub fn output_layer(&self) -> &InferredLayer {
        &self.output
    }

    pub fn register(&self) -> &InputRegister {
        self.output.left().register()
    }

    /// Number of inferred layers.
    pub fn depth(&self) -> usize {
        1 + self.output.left().depth()
    }

    /// Total number of edges across all layers.
    pub fn edge_count(&self) -> usize {
        self.output.edge_count()
    }

    /// Layer widths from the input side outwards, excluding the register.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths = vec![self.output.size()];
        let mut layer = self.output.left();
        while let Layer::Inferred(inner) = layer {
            widths.push(inner.size());
            layer = inner.left();
        }
        widths.reverse();
        widths
    }

    /// Iterate the inferred layers from the output inwards.
    pub fn layers(&self) -> impl Iterator<Item = &InferredLayer> {
        std::iter::successors(Some(&self.output), |layer| match layer.left() {
            Layer::Inferred(inner) => Some(inner),
            Layer::Static(_) => None,
        })
    }
}
