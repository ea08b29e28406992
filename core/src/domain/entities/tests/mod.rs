mod company_tests;
mod complaint_tests;
mod token_tests;
