pub mod create_engine;
pub mod delete_engine;
pub mod get_engine;
pub mod update_engine;

pub use create_engine::create_engine;
pub use delete_engine::delete_engine;
pub use get_engine::get_engine;
pub use update_engine::update_engine;
