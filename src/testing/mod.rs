pub(crate) mod crash_test;
