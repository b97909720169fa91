pub mod bias_console;

pub use bias_console::BiasConsole;
