use std::collections::TryReserveError;

#[derive(Clone, Debug, PartialEq)]
pub struct Image<T: Copy> {
    pub data: Vec<T>,
    pub size: (usize, usize),
}

/// Zero-filled buffer whose allocation failure is returned instead of
/// aborting the process.
pub fn try_buffer<T: Copy + Default>(len: usize) -> Result<Vec<T>, TryReserveError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)?;
    data.resize(len, T::default());
    Ok(data)
}

impl<T: Copy + Default> Image<T> {
    pub fn zero(size: (usize, usize)) -> Image<T> {
        Self::new_val(T::default(), size)
    }

    pub fn try_zero(size: (usize, usize)) -> Result<Image<T>, TryReserveError> {
        Ok(Self::new(try_buffer(size.0 * size.1)?, size))
    }
}

impl<T: Copy> Image<T> {
    pub fn new(data: Vec<T>, size: (usize, usize)) -> Self {
        assert_eq!(data.len(), size.0 * size.1);
        Self { data, size }
    }

    pub fn new_val(data: T, size: (usize, usize)) -> Self {
        Self::new(vec![data; size.0 * size.1], size)
    }

    pub fn width(&self) -> usize {
        self.size.0
    }

    pub fn height(&self) -> usize {
        self.size.1
    }

    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.size.0;
        &self.data[start..start + self.size.0]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.size.0;
        &mut self.data[start..start + self.size.0]
    }

    // Per-pixel clamp-to-edge sampling. The filter itself reads whole padded
    // rows instead; this is the slow path its results are checked against.
    pub fn get_clamped(&self, x: isize, y: isize) -> T {
        let x = x.clamp(0, self.size.0 as isize - 1) as usize;
        let y = y.clamp(0, self.size.1 as isize - 1) as usize;
        self.row(y)[x]
    }

    /// Every `(x, y)` in row-major order.
    pub fn iter_index(&self) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = self.size;
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    fn offset(&self, (x, y): (usize, usize)) -> usize {
        if x >= self.size.0 || y >= self.size.1 {
            panic!("Index out of range: {:?} (size {:?})", (x, y), self.size)
        }
        y * self.size.0 + x
    }
}

impl<T: Copy> std::ops::Index<(usize, usize)> for Image<T> {
    type Output = T;
    fn index(&self, index: (usize, usize)) -> &T {
        &self.data[self.offset(index)]
    }
}

impl<T: Copy> std::ops::IndexMut<(usize, usize)> for Image<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        let offset = self.offset(index);
        &mut self.data[offset]
    }
}
