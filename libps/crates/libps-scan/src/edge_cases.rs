//! Edge case tests for libps-scan
