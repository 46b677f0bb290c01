// Resume generation: form validation, prompt building, the model seam and the
// end-to-end pipeline. All model calls go through llm_client.

pub mod form;
pub mod generator;
pub mod handlers;
pub mod prompts;
