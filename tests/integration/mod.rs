mod common;
mod course_tests;
mod student_tests;
