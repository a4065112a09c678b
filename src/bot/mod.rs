//! Bot logic: command parsing, event handling, and the suggestion pipeline.

pub mod action;
pub mod commands;
pub mod event;
pub mod handler;
pub mod render;
pub mod suggest;
