pub mod measurement;
pub mod reference;
pub mod scores;
