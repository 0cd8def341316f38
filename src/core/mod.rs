pub mod app;
pub mod extract;
pub mod perm;

// vim: ts=4
