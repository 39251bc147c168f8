mod volunteer_handler;

pub use volunteer_handler::*;
