pub mod car_type;
