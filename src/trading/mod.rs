pub mod simulation;
pub mod status;
