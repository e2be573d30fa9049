pub mod config_service;
pub mod file_store;
pub mod memory_store;
pub mod paths;
pub mod storage;

pub use config_service::ConfigService;
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use paths::AmhpPaths;
