pub mod cucumber_model;
pub mod parser;
