pub mod build_model;
pub mod builder;
