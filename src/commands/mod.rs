pub mod add;
pub mod admin;
pub mod events;
pub mod register;
pub mod registrations;
pub mod remove;
pub mod stats;
