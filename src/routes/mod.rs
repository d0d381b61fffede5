pub mod bestwindow;
pub mod skymap;
pub mod visibility;
