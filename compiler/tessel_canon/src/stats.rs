use tessel_ir::TypeShape;

/// Declarations synthesized per shape, plus occurrences that reused an
/// existing declaration.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct CanonStats {
    pub arrays: usize,
    pub domains: usize,
    pub tuples: usize,
    pub sequences: usize,
    pub indices: usize,
    pub reused: usize,
}

impl CanonStats {
    /// Total declarations synthesized.
    pub fn created(&self) -> usize {
        self.arrays + self.domains + self.tuples + self.sequences + self.indices
    }

    pub(crate) fn record_created(&mut self, shape: TypeShape) {
        match shape {
            TypeShape::Array => self.arrays += 1,
            TypeShape::Domain => self.domains += 1,
            TypeShape::Tuple => self.tuples += 1,
            TypeShape::Sequence => self.sequences += 1,
            TypeShape::Index => self.indices += 1,
            TypeShape::Primitive | TypeShape::Nominal => {}
        }
    }
}
