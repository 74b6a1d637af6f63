use pcmscribe_core::{AudioChunk, EventKind, StreamConfig};
use pcmscribe_engine::{EngineRegistry, ScriptedEngine, TranscriptionSession};

#[test]
fn test_registry_engine_through_session() {
    let config = StreamConfig::new("/models/none", "a.pcm");
    let registry = EngineRegistry::new();
    let engine = registry
        .create_initialized("null", config.engine_toml().unwrap())
        .unwrap();

    let mut session = TranscriptionSession::new(engine);
    for i in 0..5 {
        let event = session
            .process_chunk(&AudioChunk::new(i, vec![0u8; 4000]))
            .unwrap();
        assert!(event.is_none());
    }
    let (event, stats) = session.finish().unwrap();
    assert!(event.is_none());
    assert_eq!(stats.chunks, 5);
    assert_eq!(stats.bytes, 20_000);
}

#[test]
fn test_scripted_utterances_accumulate_as_disjoint_finals() {
    let mut registry = EngineRegistry::new();
    registry.register("scripted", || {
        Box::new(
            ScriptedEngine::new()
                .incomplete(r#"{"partial": "turn"}"#)
                .incomplete(r#"{"partial": "turn on"}"#)
                .complete(r#"{"text": "turn on the lights"}"#)
                .incomplete(r#"{"partial": ""}"#)
                .complete(r#"{"text": "thanks"}"#),
        )
    });
    let engine = registry
        .create_initialized("scripted", toml::Value::Table(Default::default()))
        .unwrap();

    let mut session = TranscriptionSession::new(engine);
    let mut lines = Vec::new();
    for i in 0..5 {
        if let Some(event) = session
            .process_chunk(&AudioChunk::new(i, vec![0u8; 4000]))
            .unwrap()
        {
            lines.push(event.to_string());
        }
    }
    let (last, stats) = session.finish().unwrap();
    assert!(last.is_none());

    assert_eq!(
        lines,
        vec![
            "PARTIAL turn",
            "PARTIAL turn on",
            "FINAL turn on the lights",
            "FINAL thanks",
        ]
    );
    assert_eq!(stats.partials, 2);
    assert_eq!(stats.finals, 2);
    assert_eq!(EventKind::Final.label(), "FINAL");
}
