/// Location and appliance operations
pub mod laundry;

pub use laundry::LaundryService;
