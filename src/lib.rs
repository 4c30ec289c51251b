pub mod args;
pub mod cmd;
pub mod trace;
