pub mod center_sampler;
pub mod rotation_distr;
pub mod scale_distr;
pub mod transform_sampler;
