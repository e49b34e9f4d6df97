// Extraction pipeline
//
// Runs the selected extractors against one server handle, one after another,
// and hands the complete set of documents to the output writer.

pub mod orchestrator;

pub use orchestrator::ExtractionOrchestrator;
