//! Multi-component workflow tests driven through pointer events.

mod transform_tests;
