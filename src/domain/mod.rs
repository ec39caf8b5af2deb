pub mod contributions;
pub mod scenario;
pub mod simulation;
pub mod summary;
