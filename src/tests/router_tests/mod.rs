mod chat_tests;
mod sales_tests;
mod site_tests;
