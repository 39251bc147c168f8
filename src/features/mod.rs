pub mod camps;
pub mod complaints;
pub mod contacts;
pub mod reports;
pub mod uploads;
pub mod users;
pub mod volunteers;
