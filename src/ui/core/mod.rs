pub mod geom;
pub mod id;
pub mod layout;
pub mod painter;
pub mod runtime;
pub mod style;
pub mod text;
pub mod theme;
pub mod tree;
