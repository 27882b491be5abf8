pub mod event;
pub mod tracker;
pub mod walk;
