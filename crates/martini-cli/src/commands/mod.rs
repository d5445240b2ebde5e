pub mod generate;
pub mod lookup;
