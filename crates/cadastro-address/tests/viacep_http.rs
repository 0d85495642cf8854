//! ViaCEP client and verifier against a local mock server.

use std::sync::Arc;
use std::time::Duration;

use cadastro_address::{
    AddressError, AddressQuery, AddressVerifier, LookupError, PostalLookup, ViaCepClient,
};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ViaCepClient {
    ViaCepClient::new(&server.base_url(), Duration::from_secs(2)).unwrap()
}

fn paulista_query() -> AddressQuery<'static> {
    AddressQuery {
        cep: "01310-100",
        state: "SP",
        city: "São Paulo",
        street: "Avenida Paulista",
        neighborhood: "Bela Vista",
    }
}

#[tokio::test]
async fn test_lookup_hits_digits_only_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/01310100/json/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "cep": "01310-100",
                    "logradouro": "Avenida Paulista",
                    "bairro": "Bela Vista",
                    "localidade": "São Paulo",
                    "uf": "SP"
                }));
        })
        .await;

    let value = client_for(&server).lookup("01310100").await.unwrap();

    mock.assert_async().await;
    assert_eq!(value["uf"], "SP");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/99999999/json/");
            then.status(400).body("<html>Bad Request</html>");
        })
        .await;

    let err = client_for(&server).lookup("99999999").await.unwrap_err();
    assert!(matches!(err, LookupError::Status(400)));
}

#[tokio::test]
async fn test_non_json_body_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/01310100/json/");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = client_for(&server).lookup("01310100").await.unwrap_err();
    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn test_client_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/01310100/json/");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .json_body(json!({}));
        })
        .await;

    let client = ViaCepClient::new(&server.base_url(), Duration::from_millis(200)).unwrap();
    let err = client.lookup("01310100").await.unwrap_err();
    assert!(matches!(err, LookupError::Network(_)));
}

#[tokio::test]
async fn test_verifier_end_to_end_match() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/01310100/json/");
            then.status(200).json_body(json!({
                "cep": "01310-100",
                "logradouro": "Avenida Paulista",
                "complemento": "de 1047 a 1865 - lado ímpar",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP",
                "ddd": "11"
            }));
        })
        .await;

    let verifier = AddressVerifier::new(Arc::new(client_for(&server)));
    let found = verifier.verify(&paulista_query()).await.unwrap();
    assert_eq!(found.street, "Avenida Paulista");
}

#[tokio::test]
async fn test_verifier_unknown_cep_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/01310100/json/");
            then.status(200).json_body(json!({"erro": "true"}));
        })
        .await;

    let verifier = AddressVerifier::new(Arc::new(client_for(&server)));
    let err = verifier.verify(&paulista_query()).await.unwrap_err();
    // Bare {"erro": ...} lacks the five address fields
    assert!(matches!(err, AddressError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_verifier_server_down() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/01310100/json/");
            then.status(503);
        })
        .await;

    let verifier = AddressVerifier::new(Arc::new(client_for(&server)));
    let err = verifier.verify(&paulista_query()).await.unwrap_err();
    assert_eq!(err.to_string(), "Erro ao consultar CEP!");
}
