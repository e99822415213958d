mod failure_test;
mod properties_test;
mod sort_test;
