pub mod bus;
pub use bus::*;

pub mod direction;
pub use direction::*;

pub mod route;
pub use route::*;
