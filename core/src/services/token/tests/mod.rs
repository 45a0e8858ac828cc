//! Unit tests for the token lifecycle
