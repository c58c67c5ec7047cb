mod select;
mod textarea;

pub use select::Select;
pub use textarea::Textarea;
