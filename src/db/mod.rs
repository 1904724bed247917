pub mod inventario;
pub mod pool;

pub use inventario::{count_joyas, filter_joyas, list_joyas};
pub use pool::create_pool;
