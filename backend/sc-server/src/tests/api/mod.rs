mod error;
mod projects;
