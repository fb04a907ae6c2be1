#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct TensorShape {
    channels: usize,
    height: usize,
    width: usize,
}

impl std::fmt::Display for TensorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} x {}", self.channels, self.height, self.width)
    }
}

impl std::fmt::Debug for TensorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} x {}", self.channels, self.height, self.width)
    }
}

impl TensorShape {
    pub fn new(channels: usize, height: usize, width: usize) -> Self {
        assert!(channels > 0, "Cannot have 0 channels!");
        assert!(height > 0, "Cannot have 0 height!");
        assert!(width > 0, "Cannot have 0 width!");
        Self { channels, height, width }
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn size(&self) -> usize {
        self.channels * self.height * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_size() {
        let shape = TensorShape::new(3, 6, 6);
        assert_eq!(shape.channels(), 3);
        assert_eq!(shape.height(), 6);
        assert_eq!(shape.width(), 6);
        assert_eq!(shape.size(), 108);
    }

    #[test]
    fn display() {
        let shape = TensorShape::new(1, 28, 28);
        assert_eq!(shape.to_string(), "1 x 28 x 28");
        assert_eq!(format!("{shape:?}"), "1 x 28 x 28");
    }

    #[test]
    #[should_panic]
    fn zero_dim_panics() {
        TensorShape::new(3, 0, 6);
    }
}
