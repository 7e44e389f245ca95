pub mod renderer;
pub mod theme;

pub use renderer::ui;
pub use theme::Theme;
