mod status;

pub use status::EntityStatus;
