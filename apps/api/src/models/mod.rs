pub mod hospital;
pub mod snake;
pub mod user;
