mod fragment_resolver_tests;
mod interface_narrowing_tests;
mod union_narrowing_tests;
mod variable_binder_tests;
