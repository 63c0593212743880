//! Reactive state shared through Leptos context

pub mod countdown;
pub mod notice;
pub mod view;
pub mod wallet;
