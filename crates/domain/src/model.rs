pub mod entities;
pub mod value_objects;

pub use entities::Country;
pub use value_objects::Continent;
