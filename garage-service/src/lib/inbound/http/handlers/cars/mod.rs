pub mod create_car;
pub mod delete_car;
pub mod get_car;
pub mod get_cars_by_brand;
pub mod update_car;

pub use create_car::create_car;
pub use delete_car::delete_car;
pub use get_car::get_car;
pub use get_cars_by_brand::get_cars_by_brand;
pub use update_car::update_car;
