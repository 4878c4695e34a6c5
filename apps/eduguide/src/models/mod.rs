pub mod guidance;
pub mod profile;
pub mod user;

#[cfg(test)]
pub mod fixtures;
