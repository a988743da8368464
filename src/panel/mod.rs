
pub mod page;
pub mod table;
pub mod view;
pub mod window_mgr;
