// Path Planning algorithms module

pub mod cone_path;

pub use cone_path::*;
