//! Citizen user accounts.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/auth/register` | Create an account (bcrypt-hashed password) |
//! | POST | `/api/auth/login` | Check credentials, return the profile |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
