//! Pipeline scenarios, one file per stage.

mod discovery_test;
mod generation_test;
mod menu_test;
