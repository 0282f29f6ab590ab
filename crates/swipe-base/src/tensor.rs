use std::fmt;

#[derive(Debug, PartialEq)]
pub enum TensorError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::ShapeOverflow => write!(f, "shape dimensions overflow when multiplied"),
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} elements, got {got}")
            }
        }
    }
}

impl std::error::Error for TensorError {}

/// Dense row-major tensor. Camera frames and masks use HWC layout:
/// `[height, width, channels]` for frames, `[height, width]` for masks.
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("len", &self.data.len())
            .finish()
    }
}

fn shape_product(shape: &[usize]) -> Result<usize, TensorError> {
    let mut product: usize = 1;
    for &dim in shape {
        product = product.checked_mul(dim).ok_or(TensorError::ShapeOverflow)?;
    }
    Ok(product)
}

impl<T> Tensor<T> {
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        let product = shape_product(&shape)?;
        if product != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected: product,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Height of an HWC image tensor (first dimension).
    pub fn height(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    /// Width of an HWC image tensor (second dimension).
    pub fn width(&self) -> usize {
        self.shape.get(1).copied().unwrap_or(0)
    }

    /// Channel count of an HWC image tensor; 1 for 2-D masks.
    pub fn channels(&self) -> usize {
        self.shape.get(2).copied().unwrap_or(1)
    }
}

impl<T: Copy> Tensor<T> {
    /// Flat index of pixel `(x, y)` channel 0. No bounds check beyond debug.
    #[inline]
    pub fn pixel_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width() && y < self.height());
        (y * self.width() + x) * self.channels()
    }

    /// Read one channel of pixel `(x, y)`.
    #[inline]
    pub fn at(&self, x: usize, y: usize, c: usize) -> T {
        self.data[self.pixel_index(x, y) + c]
    }

    /// Write one channel of pixel `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: usize, value: T) {
        let idx = self.pixel_index(x, y) + c;
        self.data[idx] = value;
    }
}

impl<T: Default + Clone> Tensor<T> {
    pub fn zeros(shape: Vec<usize>) -> Result<Self, TensorError> {
        let product = shape_product(&shape)?;
        let data = vec![T::default(); product];
        Ok(Self { shape, data })
    }
}
