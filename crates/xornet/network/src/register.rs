use std::sync::{Arc, PoisonError, RwLock};

/// Shared input buffer at the bottom of every network chain.
///
/// Cloning the handle shares the underlying bytes; every network built on
/// the same register sees the same input.
#[derive(Clone, Debug)]
pub struct InputRegister {
    cells: Arc<RwLock<Vec<u8>>>,
}

impl InputRegister {
    /// A register of `width` zeroed cells.
    pub fn new(width: usize) -> Self {
        Self::from_bytes(vec![0; width])
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            cells: Arc::new(RwLock::new(bytes)),
        }
    }

    pub fn width(&self) -> usize {
        self.cells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Overwrite the whole register. `bytes` must be exactly
    /// [`width`](Self::width) long; the width never changes.
    pub fn load(&self, bytes: &[u8]) {
        let mut cells = self.cells.write().unwrap_or_else(PoisonError::into_inner);
        debug_assert_eq!(
            bytes.len(),
            cells.len(),
            "register load must cover every cell"
        );
        let n = cells.len().min(bytes.len());
        cells[..n].copy_from_slice(&bytes[..n]);
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<u8> {
        self.cells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether two handles point at the same buffer.
    pub fn same_register(&self, other: &InputRegister) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }
}
