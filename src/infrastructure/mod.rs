pub mod gcp;
pub mod llm;
pub mod observability;
