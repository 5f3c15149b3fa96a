use crate::{
    error::FilterError,
    image::{try_buffer, Image},
};

/// `rows * cols` zero bytes, or `OutOfMemory` when they cannot be allocated.
pub(crate) fn zeroed(rows: usize, cols: usize) -> Result<Vec<u8>, FilterError> {
    let len = rows
        .checked_mul(cols)
        .ok_or(FilterError::OutOfMemory(usize::MAX))?;
    try_buffer(len).map_err(|_| FilterError::OutOfMemory(len))
}

/// Rolling window of `size` source rows, each padded by `margin` replicated
/// edge pixels on the left and right.
///
/// Slot `j` always holds source row `center + j - margin`, clamped into the
/// image, so the window is vertically centered on the output row being
/// produced.
pub struct PaddedRows<'a> {
    image: &'a Image<u8>,
    size: usize,
    margin: usize,
    stride: usize,
    center: usize,
    data: Vec<u8>,
}

impl<'a> PaddedRows<'a> {
    pub fn new(image: &'a Image<u8>, size: usize) -> Result<Self, FilterError> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidSize(size));
        }
        let (width, height) = image.size;
        if width == 0 || height == 0 {
            return Err(FilterError::EmptyImage);
        }
        if height < size {
            return Err(FilterError::ImageTooSmall {
                width,
                height,
                size,
            });
        }
        let margin = (size - 1) / 2;
        let stride = width + 2 * margin;
        let mut rows = Self {
            image,
            size,
            margin,
            stride,
            center: 0,
            data: zeroed(size, stride)?,
        };
        for slot in 0..size {
            rows.fill(slot, slot.saturating_sub(margin));
        }
        Ok(rows)
    }

    /// Drops the oldest row and appends source row `source_row`, or the
    /// bottom row when `source_row` is past the end of the image.
    pub fn advance(&mut self, source_row: usize) {
        self.data.copy_within(self.stride.., 0);
        let source_row = source_row.min(self.image.height() - 1);
        self.fill(self.size - 1, source_row);
        self.center += 1;
    }

    fn fill(&mut self, slot: usize, source_row: usize) {
        let src = self.image.row(source_row);
        let (first, last) = (src[0], src[src.len() - 1]);
        let dst = &mut self.data[slot * self.stride..(slot + 1) * self.stride];
        let (left, rest) = dst.split_at_mut(self.margin);
        let (middle, right) = rest.split_at_mut(src.len());
        left.fill(first);
        middle.copy_from_slice(src);
        right.fill(last);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn margin(&self) -> usize {
        self.margin
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Output row the window is currently centered on.
    pub fn center(&self) -> usize {
        self.center
    }

    pub fn row(&self, slot: usize) -> &[u8] {
        &self.data[slot * self.stride..(slot + 1) * self.stride]
    }

    /// The `size` row segments of the neighborhood around output column
    /// `col`, top to bottom. Padded column `col` is image column
    /// `col - margin`, so the window starts at `col`.
    pub fn window_rows(&self, col: usize) -> impl Iterator<Item = &[u8]> + '_ {
        let size = self.size;
        self.data
            .chunks_exact(self.stride)
            .map(move |row| &row[col..col + size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3 wide, 5 tall, value = 10 * y + x
    fn grid() -> Image<u8> {
        let mut img = Image::zero((3, 5));
        for (x, y) in img.iter_index() {
            img[(x, y)] = (10 * y + x) as u8;
        }
        img
    }

    fn expected_row(img: &Image<u8>, y: isize, margin: usize) -> Vec<u8> {
        let margin = margin as isize;
        (-margin..img.width() as isize + margin)
            .map(|x| img.get_clamped(x, y))
            .collect()
    }

    #[test]
    fn initialize_replicates_top_and_sides() {
        let img = grid();
        let rows = PaddedRows::new(&img, 5).unwrap();
        assert_eq!(rows.margin(), 2);
        assert_eq!(rows.stride(), 7);
        assert_eq!(rows.row(0), &[0, 0, 0, 1, 2, 2, 2]);
        assert_eq!(rows.row(1), &[0, 0, 0, 1, 2, 2, 2]);
        assert_eq!(rows.row(2), &[0, 0, 0, 1, 2, 2, 2]);
        assert_eq!(rows.row(3), &[10, 10, 10, 11, 12, 12, 12]);
        assert_eq!(rows.row(4), &[20, 20, 20, 21, 22, 22, 22]);
    }

    #[test]
    fn every_advance_keeps_the_window_centered() {
        let img = grid();
        for &size in &[1, 3, 5] {
            let mut rows = PaddedRows::new(&img, size).unwrap();
            let margin = rows.margin();
            for center in 0..img.height() {
                assert_eq!(rows.center(), center);
                for slot in 0..size {
                    let y = center as isize + slot as isize - margin as isize;
                    assert_eq!(rows.row(slot), &expected_row(&img, y, margin)[..]);
                }
                rows.advance(center + 1 + margin);
            }
        }
    }

    #[test]
    fn advancing_past_the_bottom_repeats_last_row() {
        let img = grid();
        let mut rows = PaddedRows::new(&img, 3).unwrap();
        for center in 0..img.height() {
            rows.advance(center + 2);
        }
        for slot in 0..3 {
            assert_eq!(rows.row(slot), &[40, 40, 41, 42, 42]);
        }
    }

    #[test]
    fn window_rows_slice_the_padded_rows() {
        let img = grid();
        let rows = PaddedRows::new(&img, 3).unwrap();
        let window = rows.window_rows(0).collect::<Vec<_>>();
        assert_eq!(window, vec![&[0, 0, 1][..], &[0, 0, 1][..], &[10, 10, 11][..]]);
        let window = rows.window_rows(2).collect::<Vec<_>>();
        assert_eq!(window, vec![&[1, 2, 2][..], &[1, 2, 2][..], &[11, 12, 12][..]]);
    }

    #[test]
    fn single_column_image_pads_with_itself() {
        let img = Image::new(vec![7, 8, 9], (1, 3));
        let rows = PaddedRows::new(&img, 3).unwrap();
        assert_eq!(rows.row(0), &[7, 7, 7]);
        assert_eq!(rows.row(2), &[8, 8, 8]);
    }

    #[test]
    fn oversized_buffers_are_out_of_memory() {
        assert_eq!(zeroed(2, 3), Ok(vec![0; 6]));
        assert_eq!(
            zeroed(isize::MAX as usize, 1),
            Err(FilterError::OutOfMemory(isize::MAX as usize))
        );
        assert_eq!(
            zeroed(usize::MAX, 2),
            Err(FilterError::OutOfMemory(usize::MAX))
        );
    }

    #[test]
    fn preconditions_are_checked() {
        let img = grid();
        assert_eq!(PaddedRows::new(&img, 0).err(), Some(FilterError::InvalidSize(0)));
        assert_eq!(PaddedRows::new(&img, 4).err(), Some(FilterError::InvalidSize(4)));
        assert_eq!(
            PaddedRows::new(&img, 7).err(),
            Some(FilterError::ImageTooSmall {
                width: 3,
                height: 5,
                size: 7
            })
        );
        let empty = Image::<u8>::zero((0, 3));
        assert_eq!(PaddedRows::new(&empty, 1).err(), Some(FilterError::EmptyImage));
    }
}
