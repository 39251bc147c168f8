mod volunteer;

pub use volunteer::Volunteer;
