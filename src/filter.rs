use crate::{
    alg::Statistic, error::FilterError, image::Image, neighborhood::Neighborhood,
    rows::PaddedRows,
};
use rayon::prelude::*;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    pub size: usize,
    pub statistic: Statistic,
    pub parallel: bool,
}

impl FilterOptions {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            statistic: Statistic::default(),
            parallel: false,
        }
    }
}

/// Replaces every pixel with the statistic of its `size x size`
/// neighborhood, extending the image past its borders by edge replication.
///
/// Despite the name the default statistic is the truncated mean.
pub fn median(image: &Image<u8>, options: &FilterOptions) -> Result<Image<u8>, FilterError> {
    let mut rows = PaddedRows::new(image, options.size)?;
    let mut output = Image::try_zero(image.size)
        .map_err(|_| FilterError::OutOfMemory(image.width() * image.height()))?;
    debug!(
        width = image.width(),
        height = image.height(),
        size = options.size,
        margin = rows.margin(),
        statistic = ?options.statistic,
        parallel = options.parallel,
        "median filter"
    );
    let mut hood = Neighborhood::new(options.size, options.statistic)?;
    for y in 0..image.height() {
        let out = output.row_mut(y);
        if options.parallel {
            let rows = &rows;
            out.par_iter_mut().enumerate().try_for_each_init(
                || Neighborhood::new(options.size, options.statistic),
                |hood, (x, value)| {
                    let hood = hood.as_mut().map_err(|err| err.clone())?;
                    *value = hood.compute(rows, x);
                    Ok::<(), FilterError>(())
                },
            )?;
        } else {
            for (x, value) in out.iter_mut().enumerate() {
                *value = hood.compute(&rows, x);
            }
        }
        trace!(row = rows.center(), "row done");
        rows.advance(y + 1 + rows.margin());
    }
    Ok(output)
}
