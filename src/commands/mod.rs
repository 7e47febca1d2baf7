pub mod scan;

pub use scan::execute_scan;
