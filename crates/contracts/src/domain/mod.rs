pub mod car_type;
pub mod common;
