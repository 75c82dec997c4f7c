mod chunk_type;
mod png;

pub use chunk_type::*;
pub use png::*;
