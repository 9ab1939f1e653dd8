pub mod controller;
pub mod pointer;

pub use controller::{DragController, DragPhase, DragSink};
pub use pointer::{CoordSpace, GesturePhase, Transition, classify, drive, sample};
