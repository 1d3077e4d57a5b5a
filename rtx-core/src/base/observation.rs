//! Observation passed to the policy.
use ndarray::Array3;

/// Observation of the policy.
///
/// Only `image` changes from step to step while replaying an episode.
/// The language fields are taken from a template and held fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Camera frame of shape `[height, width, 3]`.
    pub image: Array3<u8>,

    /// Task instruction in natural language.
    pub natural_language_instruction: String,

    /// Embedding of the instruction.
    pub natural_language_embedding: Vec<f32>,
}

impl Observation {
    /// Dimension of the instruction embedding.
    pub const EMBEDDING_DIM: usize = 512;

    /// An observation with a black frame, an empty instruction and a zero embedding.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            image: Array3::zeros((height, width, 3)),
            natural_language_instruction: String::new(),
            natural_language_embedding: vec![0.0; Self::EMBEDDING_DIM],
        }
    }

    /// Sets the instruction and its embedding.
    pub fn instruction(mut self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.natural_language_instruction = text.into();
        self.natural_language_embedding = embedding;
        self
    }
}
