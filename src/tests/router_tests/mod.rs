mod analyze_tests;
mod page_tests;
