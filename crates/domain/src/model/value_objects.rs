mod continent;

pub use continent::Continent;
