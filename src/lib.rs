pub mod archive;
pub mod cli;
pub mod complete_command;
pub mod error;
pub mod fs;
pub mod identity;
pub mod index;
pub mod parser;
pub mod path;
pub mod repl;
pub mod repl_v2;
pub mod shell;
pub mod system;
