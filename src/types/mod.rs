pub mod frame_name;
pub mod prune_args;
pub mod sample_args;
