pub mod obj;
pub mod postprocess;
