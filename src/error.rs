use failure::Fail;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum FilterError {
    #[fail(display = "neighborhood size must be odd and positive, got {}", _0)]
    InvalidSize(usize),
    #[fail(display = "image has no pixels")]
    EmptyImage,
    #[fail(
        display = "image is {}x{}, too short for a {}x{} neighborhood",
        width, height, size, size
    )]
    ImageTooSmall {
        width: usize,
        height: usize,
        size: usize,
    },
    #[fail(display = "insufficient memory for a {} byte output image", _0)]
    OutOfMemory(usize),
}
