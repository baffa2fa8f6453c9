//! Full gesture workflow tests.

mod gesture_workflow_tests;
