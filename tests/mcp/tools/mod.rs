mod config;
mod extract;
mod inspect;
