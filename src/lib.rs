pub mod registry;
pub mod resolver;
pub mod runtime;
pub mod scaffold;
pub mod settings;
