//! Tests for the expansion module

mod spheroid_tests;
