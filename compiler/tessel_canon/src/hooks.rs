//! Code-generation hook for sequence types.

use tessel_ir::{Program, TypeId};

/// Materializes the backing implementation of a sequence type.
///
/// Called once per canonical sequence type, right after its declaration is
/// spliced in. Later occurrences that reuse the declaration do not call it
/// again. The hook may add to the program but must not fail.
pub trait SeqMaterializer {
    fn materialize(&mut self, program: &mut Program, seq: TypeId);
}

/// Hook for pipelines that generate sequence support elsewhere.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoopMaterializer;

impl SeqMaterializer for NoopMaterializer {
    fn materialize(&mut self, _: &mut Program, _: TypeId) {}
}

/// Records every sequence type it is asked to materialize, in call order.
#[derive(Clone, Default, Debug)]
pub struct RecordingMaterializer {
    pub calls: Vec<TypeId>,
}

impl RecordingMaterializer {
    /// Canonical names of the recorded sequence types.
    pub fn names(&self, program: &Program) -> Vec<&'static str> {
        self.calls
            .iter()
            .filter_map(|&seq| program.type_name(seq))
            .collect()
    }
}

impl SeqMaterializer for RecordingMaterializer {
    fn materialize(&mut self, _: &mut Program, seq: TypeId) {
        self.calls.push(seq);
    }
}
