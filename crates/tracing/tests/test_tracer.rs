//! Integration tests for installing the atlas tracer. The subscriber is global, so this binary
//! initializes it exactly once.

mod integration_tests {
    use atlas_tracing::{AtlasTracer, FileInfo, LayerInfo, LogFormat, Tracer};

    #[test]
    fn test_init_writes_logfmt_file() {
        let dir = std::env::temp_dir().join(format!("atlas-tracing-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let guard = AtlasTracer::new()
            .with_stdout(LayerInfo::new(
                LogFormat::Terminal,
                "error".to_string(),
                String::new(),
                Some("never".to_string()),
            ))
            .with_file(
                LayerInfo::new(LogFormat::LogFmt, "info".to_string(), "info".to_string(), None),
                FileInfo::new(dir.clone(), "atlas.log".to_string()),
            )
            .init()
            .expect("failed to initialize tracer");
        assert!(guard.is_some());

        tracing::info!(country = "France", "fetched countries");
        tracing::debug!("filtered out by the file layer");

        // dropping the guard flushes the non-blocking writer
        drop(guard);

        let contents =
            std::fs::read_to_string(dir.join("atlas.log")).expect("failed to read log file");
        assert!(contents.contains("level=info"), "unexpected log contents: {contents}");
        assert!(contents.contains("fetched countries"), "unexpected log contents: {contents}");
        assert!(contents.contains("France"), "unexpected log contents: {contents}");
        assert!(!contents.contains("filtered out"), "unexpected log contents: {contents}");

        // a second global subscriber cannot be installed
        assert!(AtlasTracer::new().init().is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
