pub mod asteroids;
pub mod authors;
pub mod errors;
