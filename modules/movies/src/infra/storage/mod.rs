pub mod entity;
pub mod mapper;
pub mod matcher;
pub mod memory_repo;

pub use memory_repo::InMemoryMoviesRepository;
