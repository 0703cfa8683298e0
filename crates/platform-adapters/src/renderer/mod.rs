//! Template renderers.

mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
