mod background_tasks;
mod bot;
mod database;
mod inline;
mod message;
mod tags;
mod text;
mod util;
mod web;

pub use bot::{Config, UpdateListener};
