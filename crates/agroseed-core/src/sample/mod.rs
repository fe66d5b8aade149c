pub mod dates;
pub mod weighted;

pub use weighted::{
    dirichlet_weights, pick_uniform, pick_weighted, sample_weighted, weighted_index, GroupedPool,
};
