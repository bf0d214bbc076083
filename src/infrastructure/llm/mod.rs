mod gemini_client;

pub use gemini_client::{Candidate, CandidateContent, ContentPart, GeminiClient, GenerateContentResponse};
