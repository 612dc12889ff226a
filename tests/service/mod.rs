//! Integration tests for domain services that cross the feed boundary.

mod sync;
