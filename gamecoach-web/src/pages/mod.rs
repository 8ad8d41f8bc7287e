pub mod auth;
pub mod coach;
pub mod dashboard;
pub mod game;
pub mod home;
pub mod join;
pub mod legal;
pub mod not_found;
pub mod search;
pub mod slug;
