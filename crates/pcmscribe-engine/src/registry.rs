use crate::engine_trait::SpeechEngine;
use pcmscribe_core::AsrError;
use std::collections::HashMap;

pub struct EngineRegistry {
    factories: HashMap<String, fn() -> Box<dyn SpeechEngine>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("null", || Box::new(crate::null_engine::NullEngine::new()));
        #[cfg(feature = "vosk")]
        registry.register("vosk", || Box::new(crate::vosk_engine::VoskEngine::new()));
        registry
    }

    pub fn register(&mut self, name: &str, factory: fn() -> Box<dyn SpeechEngine>) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn SpeechEngine>, AsrError> {
        self.factories
            .get(name)
            .map(|f| f())
            .ok_or_else(|| AsrError::EngineNotFound(name.to_string()))
    }

    /// Create an engine and initialize it in one step.
    pub fn create_initialized(
        &self,
        name: &str,
        config: toml::Value,
    ) -> Result<Box<dyn SpeechEngine>, AsrError> {
        let mut engine = self.create(name)?;
        engine.initialize(config)?;
        Ok(engine)
    }

    pub fn list_engines(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedEngine;

    #[test]
    fn test_registry_new_has_null_engine() {
        let registry = EngineRegistry::new();
        assert!(registry.create("null").is_ok());
    }

    #[test]
    fn test_registry_create_null_returns_correct_name() {
        let registry = EngineRegistry::new();
        let engine = registry.create("null").unwrap();
        assert_eq!(engine.name(), "null");
    }

    #[test]
    fn test_registry_create_unknown_returns_error() {
        let registry = EngineRegistry::new();
        match registry.create("nope") {
            Err(AsrError::EngineNotFound(name)) => assert_eq!(name, "nope"),
            _ => panic!("expected EngineNotFound error"),
        }
    }

    #[test]
    fn test_registry_register_custom_engine() {
        let mut registry = EngineRegistry::new();
        registry.register("scripted", || Box::new(ScriptedEngine::new()));
        let engine = registry.create("scripted").unwrap();
        assert_eq!(engine.name(), "scripted");
    }

    #[test]
    fn test_registry_list_engines_is_sorted() {
        let mut registry = EngineRegistry::new();
        registry.register("aaa", || Box::new(ScriptedEngine::new()));
        let engines = registry.list_engines();
        assert_eq!(engines.first(), Some(&"aaa"));
        assert!(engines.contains(&"null"));
    }

    #[test]
    fn test_registry_create_initialized_runs_initialize() {
        let mut registry = EngineRegistry::new();
        registry.register("scripted", || Box::new(ScriptedEngine::new()));
        let mut engine = registry
            .create_initialized("scripted", toml::Value::Table(Default::default()))
            .unwrap();
        // An uninitialized ScriptedEngine rejects chunks.
        let chunk = pcmscribe_core::AudioChunk::new(0, vec![0u8; 2]);
        assert!(engine.accept_chunk(&chunk).is_ok());
    }

    #[cfg(not(feature = "vosk"))]
    #[test]
    fn test_registry_without_vosk_feature_has_no_vosk() {
        let registry = EngineRegistry::new();
        assert!(matches!(
            registry.create("vosk"),
            Err(AsrError::EngineNotFound(_))
        ));
    }
}
