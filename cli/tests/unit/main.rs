//! Unit tests for dpkctl
//!
//! These tests use an in-memory platform and run fast without network I/O.

mod app_install_service;
