pub mod cli;
pub mod color;
pub mod error;
pub mod flavor;
pub mod generate;
pub mod preview;
pub mod template;
pub mod xterm;
