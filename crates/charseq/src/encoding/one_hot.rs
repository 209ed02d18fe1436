//! # One-Hot Vectors

use crate::errors::{CSError, CSResult};

fn check_index(
    index: usize,
    width: usize,
) -> CSResult<()> {
    if index >= width {
        return Err(CSError::InvalidConfig(format!(
            "one-hot index {index} out of range for width {width}"
        )));
    }
    Ok(())
}

/// A single one-hot vector: `width` values, with `1.0` at `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotVector {
    index: usize,
    values: Vec<f32>,
}

impl OneHotVector {
    /// Create a new one-hot vector.
    ///
    /// ## Arguments
    /// * `index` - the hot position; must be `< width`.
    /// * `width` - the vector length.
    pub fn new(
        index: usize,
        width: usize,
    ) -> CSResult<Self> {
        check_index(index, width)?;
        let mut values = vec![0.0; width];
        values[index] = 1.0;
        Ok(Self { index, values })
    }

    /// Move the hot position, reusing the buffer.
    pub fn set_index(
        &mut self,
        index: usize,
    ) -> CSResult<()> {
        check_index(index, self.values.len())?;
        self.values[self.index] = 0.0;
        self.values[index] = 1.0;
        self.index = index;
        Ok(())
    }

    /// The hot position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The vector length.
    pub fn width(&self) -> usize {
        self.values.len()
    }

    /// The dense values.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

/// A sequence of one-hot vectors, stored densely in row-major `[len, width]` order.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotSequence {
    indices: Vec<usize>,
    width: usize,
    data: Vec<f32>,
}

impl OneHotSequence {
    /// Build a sequence from hot positions.
    ///
    /// ## Arguments
    /// * `indices` - the hot position of each row; each must be `< width`.
    /// * `width` - the row length.
    pub fn from_indices(
        indices: Vec<usize>,
        width: usize,
    ) -> CSResult<Self> {
        let mut data = vec![0.0; indices.len() * width];
        for (row, &index) in indices.iter().enumerate() {
            check_index(index, width)?;
            data[row * width + index] = 1.0;
        }
        Ok(Self {
            indices,
            width,
            data,
        })
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Is the sequence empty?
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The row length.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The `(len, width)` shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.width)
    }

    /// The hot position of each row.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// A single row.
    ///
    /// ## Panics
    /// If `row >= len`.
    pub fn row(
        &self,
        row: usize,
    ) -> &[f32] {
        &self.data[row * self.width..(row + 1) * self.width]
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // `chunks_exact` requires a non-zero size.
        self.data.chunks_exact(self.width.max(1))
    }

    /// The flat row-major data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
