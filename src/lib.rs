/// Contains convolution hyperparameters and the output-shape computation.
pub mod conv;
/// Contains the `TensorShape` value type.
pub mod shape;

pub use conv::{Conv2dDescription, ConvParams, InvalidConfiguration};
pub use shape::TensorShape;
