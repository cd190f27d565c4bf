//! 계정 저장소 구현체

pub mod memory_repo;
pub mod mongo_repo;

pub use memory_repo::InMemoryAccountRepository;
pub use mongo_repo::MongoAccountRepository;
