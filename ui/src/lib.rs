mod component;
pub mod view;
