//! Fixed-topology feedforward network driving a biped.
//!
//! One hidden layer, no biases, tanh on both layers. The weights double as the
//! genome: [`NeuralNetwork::flatten`] lays out the input→hidden matrix followed by
//! the hidden→output matrix, and [`NeuralNetwork::restore`] is its exact inverse.

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single-hidden-layer perceptron without bias terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuralNetwork {
    /// Input → hidden weights (`input_count` × `hidden_count`).
    pub weights_ih: Array2<f32>,
    /// Hidden → output weights (`hidden_count` × `output_count`).
    pub weights_ho: Array2<f32>,
    /// Hidden activations from the most recent forward pass.
    #[serde(skip)]
    hidden: Array1<f32>,
}

impl NeuralNetwork {
    /// Creates a network with weights drawn uniformly from [-1, 1].
    ///
    /// Input→hidden weights are drawn first, row by row, then hidden→output.
    pub fn new_random<R: Rng>(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        rng: &mut R,
    ) -> Self {
        let weights_ih = Array2::from_shape_simple_fn((input_count, hidden_count), || {
            rng.random_range(-1.0_f32..=1.0)
        });
        let weights_ho = Array2::from_shape_simple_fn((hidden_count, output_count), || {
            rng.random_range(-1.0_f32..=1.0)
        });

        Self {
            weights_ih,
            weights_ho,
            hidden: Array1::zeros(hidden_count),
        }
    }

    /// Creates a network with every weight set to zero.
    pub fn zeros(input_count: usize, hidden_count: usize, output_count: usize) -> Self {
        Self {
            weights_ih: Array2::zeros((input_count, hidden_count)),
            weights_ho: Array2::zeros((hidden_count, output_count)),
            hidden: Array1::zeros(hidden_count),
        }
    }

    /// Number of inputs.
    pub fn input_count(&self) -> usize {
        self.weights_ih.nrows()
    }

    /// Number of hidden units.
    pub fn hidden_count(&self) -> usize {
        self.weights_ih.ncols()
    }

    /// Number of outputs.
    pub fn output_count(&self) -> usize {
        self.weights_ho.ncols()
    }

    /// Length of the flattened weight vector.
    pub fn gene_count(&self) -> usize {
        self.weights_ih.len() + self.weights_ho.len()
    }

    /// Runs a forward pass.
    ///
    /// `hidden[i] = tanh(Σ_j inputs[j] · W_ih[j, i])` and
    /// `outputs[i] = tanh(Σ_j hidden[j] · W_ho[j, i])`.
    #[inline]
    pub fn forward(&mut self, inputs: ArrayView1<f32>) -> Array1<f32> {
        self.hidden = inputs.dot(&self.weights_ih);
        self.hidden.mapv_inplace(f32::tanh);

        let mut outputs = self.hidden.dot(&self.weights_ho);
        outputs.mapv_inplace(f32::tanh);
        outputs
    }

    /// Copies all weights into `genes`: `W_ih` row-major, then `W_ho` row-major.
    pub fn flatten_into(&self, genes: &mut [f32]) {
        let split = self.weights_ih.len();
        for (gene, weight) in genes[..split].iter_mut().zip(self.weights_ih.iter()) {
            *gene = *weight;
        }
        for (gene, weight) in genes[split..].iter_mut().zip(self.weights_ho.iter()) {
            *gene = *weight;
        }
    }

    /// Returns all weights as a gene vector.
    pub fn flatten(&self) -> Vec<f32> {
        let mut genes = vec![0.0; self.gene_count()];
        self.flatten_into(&mut genes);
        genes
    }

    /// Overwrites all weights from a gene vector produced by [`Self::flatten`].
    ///
    /// `genes` must hold exactly [`Self::gene_count`] values.
    pub fn restore(&mut self, genes: &[f32]) {
        assert_eq!(
            genes.len(),
            self.gene_count(),
            "gene vector length does not match network shape"
        );
        let (ih, ho) = genes.split_at(self.weights_ih.len());
        for (weight, gene) in self.weights_ih.iter_mut().zip(ih) {
            *weight = *gene;
        }
        for (weight, gene) in self.weights_ho.iter_mut().zip(ho) {
            *weight = *gene;
        }
    }
}

impl PartialEq for NeuralNetwork {
    fn eq(&self, other: &Self) -> bool {
        self.weights_ih == other.weights_ih && self.weights_ho == other.weights_ho
    }
}
