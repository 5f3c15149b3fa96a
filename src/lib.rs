pub mod alg;
pub mod error;
pub mod filter;
pub mod image;
pub mod imgio;
pub mod neighborhood;
pub mod rows;

pub use crate::{
    alg::Statistic,
    error::FilterError,
    filter::{median, FilterOptions},
    image::Image,
};
