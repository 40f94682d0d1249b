pub mod maps;
pub mod presets;
pub mod shapes;
