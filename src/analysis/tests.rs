// Tests for the prediction client and wire types
// Focus: multipart body shape, failure classification, trusted-response parsing

#[cfg(test)]
mod prediction_client_tests {
    use super::super::*;
    use crate::test_fixture::{GLIOMA_RESPONSE, png_file, refused_endpoint, serve_once};

    fn request(model: ModelId) -> AnalysisRequest {
        AnalysisRequest {
            file: png_file("scan.png", 4, 4),
            model,
        }
    }

    #[tokio::test]
    async fn test_predict_success_parses_body() {
        let (endpoint, server) = serve_once(200, GLIOMA_RESPONSE).await;
        let client = PredictionClient::new(endpoint);

        let prediction = client.predict(&request(ModelId::Inception)).await.unwrap();

        assert_eq!(prediction.class_name, "Glioma");
        assert!((prediction.confidence - 0.873).abs() < 1e-9);
        assert_eq!(prediction.probabilities.len(), 4);
        assert!((prediction.probability("No Tumor") - 0.057).abs() < 1e-9);

        let raw = server.await.unwrap();
        let text = String::from_utf8_lossy(&raw).to_ascii_lowercase();
        assert!(text.starts_with("post /predict http/1.1"), "{text}");
        assert!(text.contains("multipart/form-data; boundary="));
        assert!(text.contains(r#"name="model_id""#));
        assert!(text.contains("\r\n\r\ninception\r\n"));
        assert!(text.contains(r#"name="file"; filename="scan.png""#));
        assert!(text.contains("content-type: image/png"));
    }

    #[tokio::test]
    async fn test_predict_server_error_is_status_failure() {
        let (endpoint, server) = serve_once(500, r#"{"detail":"model not loaded"}"#).await;
        let client = PredictionClient::new(endpoint);

        let err = client.predict(&request(ModelId::Unet)).await.unwrap_err();

        match &err {
            AnalysisError::Status { status } => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {other:?}"),
        }
        assert!(err.is_server_side());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_predict_not_found_is_status_failure() {
        let (endpoint, server) = serve_once(404, "").await;
        let err = PredictionClient::new(endpoint)
            .predict(&request(ModelId::Baseline))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Status { .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_predict_bad_json_is_parse_failure() {
        let (endpoint, server) = serve_once(200, "<html>oops</html>").await;
        let err = PredictionClient::new(endpoint)
            .predict(&request(ModelId::Baseline))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Parse { .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_predict_unreachable_is_network_failure() {
        let err = PredictionClient::new(refused_endpoint().await)
            .predict(&request(ModelId::Baseline))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Network { .. }));
        assert!(!err.is_server_side());
    }

    #[test]
    fn test_default_endpoint() {
        let client = PredictionClient::default();
        assert_eq!(client.endpoint(), "http://localhost:8000/predict");
    }
}

#[cfg(test)]
mod wire_type_tests {
    use super::super::*;
    use crate::test_fixture::NO_TUMOR_RESPONSE;

    #[test]
    fn test_model_id_strings() {
        assert_eq!(ModelId::default(), ModelId::Baseline);
        assert_eq!(ModelId::Unet.as_str(), "unet");
        assert_eq!("Inception".parse::<ModelId>(), Ok(ModelId::Inception));
        assert!("resnet".parse::<ModelId>().is_err());
        assert_eq!(ModelId::Inception.to_string(), "inception");
    }

    #[test]
    fn test_no_tumor_detection() {
        let prediction: Prediction = serde_json::from_str(NO_TUMOR_RESPONSE).unwrap();
        assert!(prediction.is_no_tumor());
    }

    #[test]
    fn test_missing_probability_is_nan() {
        let prediction: Prediction =
            serde_json::from_str(r#"{"class":"Pituitary","confidence":0.6,"probabilities":{"Pituitary":0.6}}"#)
                .unwrap();
        assert!(prediction.probability("Glioma").is_nan());
        assert!(!prediction.is_no_tumor());
    }

    #[test]
    fn test_bar_keys_match_service_labels() {
        let keys: Vec<&str> = CLASS_BARS.iter().map(|(_, key, _)| *key).collect();
        assert_eq!(keys, ["Glioma", "Meningioma", "Pituitary", "No Tumor"]);
    }
}
