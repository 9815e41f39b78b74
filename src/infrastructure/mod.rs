pub mod http;
pub mod rendering;
pub mod services;
pub mod ui;

pub use http::GlooApiClient;
pub use rendering::{ChartJsInstance, ChartJsRenderer};
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use ui::DomSurface;
