pub use vq_entities as entities;

pub mod gateways;
pub mod progress;
pub mod repositories;
pub mod usecases;

pub use repositories::Error as RepoError;
