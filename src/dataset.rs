pub mod class_map;
pub mod common_structs;

pub mod data_loaders;
