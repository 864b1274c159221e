pub mod iam;
pub mod prompt;
pub mod watsonx;
