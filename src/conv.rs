use crate::shape::TensorShape;

/// Hyperparameters of a convolution along a single spatial axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvParams {
    pub kernel_size: usize,
    pub stride: usize,
    pub padding: usize,
    pub dilation: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidConfiguration {
    ZeroKernelSize,
    ZeroStride,
    ZeroDilation,
    ZeroInputDim,
    ZeroOutputChannels,
    KernelExceedsInput { input_dim: usize, padding: usize, effective_kernel_size: usize },
}

impl std::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for InvalidConfiguration {}

impl ConvParams {
    /// A unit-stride, unpadded, undilated kernel.
    pub fn new(kernel_size: usize) -> Self {
        Self { kernel_size, stride: 1, padding: 0, dilation: 1 }
    }

    fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.kernel_size == 0 {
            return Err(InvalidConfiguration::ZeroKernelSize);
        }

        if self.stride == 0 {
            return Err(InvalidConfiguration::ZeroStride);
        }

        if self.dilation == 0 {
            return Err(InvalidConfiguration::ZeroDilation);
        }

        Ok(())
    }

    /// Span of input positions the dilated kernel covers.
    /// Requires `kernel_size > 0` and `dilation > 0`.
    pub fn effective_kernel_size(&self) -> usize {
        self.dilation * (self.kernel_size - 1) + 1
    }

    /// Output size along one spatial axis:
    ///
    /// `(input_dim + 2 * padding - effective_kernel_size) / stride + 1`
    ///
    /// with floor division. Fails if any hyperparameter is zero where it must
    /// not be, or if the dilated kernel does not fit in the padded input.
    pub fn output_dim(&self, input_dim: usize) -> Result<usize, InvalidConfiguration> {
        self.validate()?;

        if input_dim == 0 {
            return Err(InvalidConfiguration::ZeroInputDim);
        }

        let effective_kernel_size = self.effective_kernel_size();
        let padded = input_dim + 2 * self.padding;

        if padded < effective_kernel_size {
            return Err(InvalidConfiguration::KernelExceedsInput {
                input_dim,
                padding: self.padding,
                effective_kernel_size,
            });
        }

        Ok((padded - effective_kernel_size) / self.stride + 1)
    }

    /// Padding that makes the output dimension equal the input dimension.
    /// Only exists for unit stride and an odd effective kernel size.
    pub fn same_padding(&self) -> Option<usize> {
        if self.validate().is_err() || self.stride != 1 {
            return None;
        }

        let effective_kernel_size = self.effective_kernel_size();
        (effective_kernel_size % 2 == 1).then(|| effective_kernel_size / 2)
    }
}

/// Describes how a 2D convolution maps a `channels x height x width` image
/// onto its output shape. The output is fixed at construction, with the
/// spatial dimensions derived independently along each axis and the channel
/// count taken from the filter bank, never from the input.
#[derive(Clone, Copy, Debug)]
pub struct Conv2dDescription {
    pub input: TensorShape,
    pub output: TensorShape,
    pub vertical: ConvParams,
    pub horizontal: ConvParams,
}

impl Conv2dDescription {
    pub fn new(
        input: TensorShape,
        out_channels: usize,
        params: ConvParams,
    ) -> Result<Self, InvalidConfiguration> {
        Self::new_per_axis(input, out_channels, params, params)
    }

    pub fn new_per_axis(
        input: TensorShape,
        out_channels: usize,
        vertical: ConvParams,
        horizontal: ConvParams,
    ) -> Result<Self, InvalidConfiguration> {
        if out_channels == 0 {
            return Err(InvalidConfiguration::ZeroOutputChannels);
        }

        let hout = vertical.output_dim(input.height())?;
        let wout = horizontal.output_dim(input.width())?;

        Ok(Self { input, output: TensorShape::new(out_channels, hout, wout), vertical, horizontal })
    }
}
