pub mod analysis;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod reader;
pub mod render;
