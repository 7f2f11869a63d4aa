//! Recipe trees: a recipe is a named quantity holding an ordered list of
//! sub-recipes. Ingredients merge by name, whole recipes scale proportionally,
//! and the arithmetic operators work on copies.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Comida, Item, Items, Projection, Target};
