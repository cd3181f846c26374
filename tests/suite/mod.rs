mod config;
mod hello;
mod program_c;
