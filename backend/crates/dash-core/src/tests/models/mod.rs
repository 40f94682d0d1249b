mod file;
mod profile;
mod region;
mod role;
mod user;
