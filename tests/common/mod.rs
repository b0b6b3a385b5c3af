//! Shared fixtures for end-to-end tests.

#![allow(dead_code)]

pub mod project;
