//! Integration tests for the countries pipeline, run against in-memory transports.

mod integration_tests {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use atlas_countries::{CountriesPipeline, Country, Currency, Error, Language, Transport};
    use bytes::Bytes;

    const TEST_COUNTRY: &str = r#"[
        {
            "name": "Test Country",
            "alpha2Code": "TC",
            "alpha3Code": "TCY",
            "capital": "Capital",
            "region": "Region",
            "population": 1000,
            "currencies": [{ "code": "USD", "name": "Dollar", "symbol": "$" }],
            "languages": [{ "name": "English", "nativeName": "English" }]
        }
    ]"#;

    fn test_country() -> Country {
        Country {
            name: "Test Country".to_string(),
            alpha2_code: "TC".to_string(),
            alpha3_code: "TCY".to_string(),
            capital: "Capital".to_string(),
            region: "Region".to_string(),
            population: 1000,
            currencies: vec![Currency {
                code: "USD".to_string(),
                name: "Dollar".to_string(),
                symbol: "$".to_string(),
            }],
            languages: vec![Language {
                name: "English".to_string(),
                native_name: "English".to_string(),
            }],
        }
    }

    /// A transport that answers every call with the same canned response.
    struct MockTransport {
        response: Result<Option<&'static str>, &'static str>,
        calls: AtomicUsize,
        urls: Mutex<Vec<String>>,
    }

    impl MockTransport {
        fn new(response: Result<Option<&'static str>, &'static str>) -> Arc<Self> {
            Arc::new(Self { response, calls: AtomicUsize::new(0), urls: Mutex::new(vec![]) })
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn fetch(&self, url: &str) -> Result<Option<Bytes>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().expect("poisoned").push(url.to_string());
            match self.response {
                Ok(body) => Ok(body.map(|body| Bytes::from_static(body.as_bytes()))),
                Err(message) => Err(Error::TransportError(message.to_string())),
            }
        }
    }

    /// A transport whose n-th call waits `delay` and then returns `body`.
    struct SequencedTransport {
        responses: Vec<(Duration, &'static str)>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for SequencedTransport {
        async fn fetch(&self, _url: &str) -> Result<Option<Bytes>, Error> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            let (delay, body) = self.responses[index];
            tokio::time::sleep(delay).await;
            Ok(Some(Bytes::from_static(body.as_bytes())))
        }
    }

    #[tokio::test]
    async fn test_initial_state() {
        let pipeline = CountriesPipeline::new(MockTransport::new(Ok(Some("[]"))), "mock://all");

        assert!(pipeline.countries().get().is_empty());
        assert!(pipeline.error().get().is_none());
        assert_eq!(pipeline.endpoint(), "mock://all");
    }

    #[tokio::test]
    async fn test_refresh_publishes_countries() {
        let transport = MockTransport::new(Ok(Some(TEST_COUNTRY)));
        let pipeline = CountriesPipeline::new(transport.clone(), "mock://all");

        pipeline.refresh().await.expect("refresh task panicked");

        assert_eq!(pipeline.countries().get(), vec![test_country()]);
        assert!(pipeline.error().get().is_none());
        assert_eq!(*transport.urls.lock().expect("poisoned"), vec!["mock://all".to_string()]);
    }

    #[tokio::test]
    async fn test_refresh_success_leaves_error_untouched() {
        let pipeline =
            CountriesPipeline::new(MockTransport::new(Ok(Some(TEST_COUNTRY))), "mock://all");
        pipeline.error().set(Some(Arc::new(Error::DecodeError)));

        pipeline.refresh().await.expect("refresh task panicked");

        assert_eq!(pipeline.countries().get().len(), 1);
        assert!(matches!(pipeline.error().get().as_deref(), Some(Error::DecodeError)));
    }

    #[tokio::test]
    async fn test_refresh_transport_failure() {
        let pipeline = CountriesPipeline::new(MockTransport::new(Err("offline")), "mock://all");
        pipeline.countries().set(vec![test_country()]);

        pipeline.refresh().await.expect("refresh task panicked");

        match pipeline.error().get().as_deref() {
            Some(Error::TransportError(message)) => assert_eq!(message, "offline"),
            other => panic!("expected transport error, got {other:?}"),
        }
        assert_eq!(pipeline.countries().get(), vec![test_country()]);
    }

    #[tokio::test]
    async fn test_refresh_decode_failure() {
        let pipeline =
            CountriesPipeline::new(MockTransport::new(Ok(Some("Invalid JSON"))), "mock://all");
        pipeline.countries().set(vec![test_country()]);

        pipeline.refresh().await.expect("refresh task panicked");

        assert!(matches!(pipeline.error().get().as_deref(), Some(Error::DecodeError)));
        assert_eq!(pipeline.countries().get(), vec![test_country()]);
    }

    #[tokio::test]
    async fn test_refresh_absent_body_publishes_empty_list() {
        let pipeline = CountriesPipeline::new(MockTransport::new(Ok(None)), "mock://all");
        pipeline.countries().set(vec![test_country()]);

        pipeline.refresh().await.expect("refresh task panicked");

        assert!(pipeline.countries().get().is_empty());
        assert!(pipeline.error().get().is_none());
    }

    #[tokio::test]
    async fn test_refresh_notifies_subscribers() {
        let pipeline =
            CountriesPipeline::new(MockTransport::new(Ok(Some(TEST_COUNTRY))), "mock://all");
        let mut rx = pipeline.countries().subscribe();
        assert!(rx.borrow_and_update().is_empty());

        // do not await the handle; the subscriber is what observes completion
        let _handle = pipeline.refresh();

        tokio::time::timeout(Duration::from_secs(1), rx.changed())
            .await
            .expect("refresh did not publish in time")
            .expect("holder dropped");
        assert_eq!(*rx.borrow_and_update(), vec![test_country()]);
    }

    #[tokio::test]
    async fn test_concurrent_refreshes_are_independent() {
        let transport = MockTransport::new(Ok(Some(TEST_COUNTRY)));
        let pipeline = CountriesPipeline::new(transport.clone(), "mock://all");

        let handles = vec![pipeline.refresh(), pipeline.refresh(), pipeline.refresh()];
        for handle in handles {
            handle.await.expect("refresh task panicked");
        }

        assert_eq!(transport.calls.load(Ordering::SeqCst), 3);
        assert_eq!(pipeline.countries().get(), vec![test_country()]);
    }

    #[tokio::test]
    async fn test_stale_refresh_overwrites_newer_result() {
        let stale = TEST_COUNTRY;
        let fresh = r#"[{"name": "Fresh", "alpha2Code": "FR", "alpha3Code": "FRE",
            "capital": "C", "region": "R", "population": 1, "currencies": [], "languages": []}]"#;
        let transport = Arc::new(SequencedTransport {
            responses: vec![(Duration::from_millis(200), stale), (Duration::ZERO, fresh)],
            calls: AtomicUsize::new(0),
        });
        let pipeline = CountriesPipeline::new(transport.clone(), "mock://all");

        let first = pipeline.refresh();
        // make sure the first call has reached the transport before starting the second
        while transport.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        pipeline.refresh().await.expect("refresh task panicked");
        assert_eq!(pipeline.countries().get()[0].name, "Fresh");

        first.await.expect("refresh task panicked");
        assert_eq!(pipeline.countries().get(), vec![test_country()]);
    }

    #[tokio::test]
    async fn test_fetch_countries_does_not_publish() {
        let pipeline =
            CountriesPipeline::new(MockTransport::new(Ok(Some(TEST_COUNTRY))), "mock://all");

        let countries = pipeline.fetch_countries().await.expect("fetch should succeed");

        assert_eq!(countries, vec![test_country()]);
        assert!(pipeline.countries().get().is_empty());
    }
}
