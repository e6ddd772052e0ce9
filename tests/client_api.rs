//! Client operations against a mocked API server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rocketpay::models::{
    ChequeState, CreateChequeRequest, CreateInvoiceRequest, CreateTransferRequest,
    CreateWithdrawalRequest, InvoiceStatus, PageRequest, WithdrawalStatus,
};
use rocketpay::{ApiConfig, ApiErrorCode, PayClient};

fn client_for(server: &MockServer) -> PayClient {
    PayClient::new(ApiConfig::new("test-key").with_base_url(server.uri())).unwrap()
}

fn success(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": data}))
}

#[tokio::test]
async fn app_info_sends_the_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/info"))
        .and(header("Rocket-Pay-Key", "test-key"))
        .respond_with(success(json!({
            "name": "Coffee Shop",
            "feePercents": 1.5,
            "balances": [{"currency": "TONCOIN", "balance": 12.5}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client_for(&server).app_info().await.unwrap();

    assert_eq!(info.name, "Coffee Shop");
    assert_eq!(info.balances[0].balance, 12.5);
}

#[tokio::test]
async fn create_invoice_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tg-invoices"))
        .and(body_partial_json(json!({
            "amount": 1.5,
            "currency": "TONCOIN",
            "hiddenMessage": "thanks"
        })))
        .respond_with(success(json!({
            "id": 1283,
            "amount": 1.5,
            "currency": "TONCOIN",
            "status": "active",
            "hiddenMessage": "thanks",
            "link": "https://t.me/rocketpay_bot?start=inv_abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateInvoiceRequest {
        hidden_message: Some("thanks".to_string()),
        ..CreateInvoiceRequest::new(1.5, "TONCOIN")
    };
    let invoice = client_for(&server).create_invoice(&request).await.unwrap();

    assert_eq!(invoice.id, 1283);
    assert_eq!(invoice.status, InvoiceStatus::Active);
    assert_eq!(invoice.link.as_deref(), Some("https://t.me/rocketpay_bot?start=inv_abc"));
}

#[tokio::test]
async fn list_invoices_sends_pagination_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tg-invoices"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "100"))
        .respond_with(success(json!({
            "total": 1,
            "limit": 50,
            "offset": 100,
            "results": [{"id": 7, "amount": 2, "currency": "USDT", "status": "paid"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_invoices(PageRequest::new().with_limit(50).with_offset(100))
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.results[0].status, InvoiceStatus::Paid);
}

#[tokio::test]
async fn delete_invoice_succeeds_without_data() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/tg-invoices/1283"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_invoice(1283).await.unwrap();
}

#[tokio::test]
async fn cheque_lifecycle_calls_the_right_routes() {
    let server = MockServer::start().await;
    let cheque = json!({
        "id": 77,
        "currency": "TONCOIN",
        "total": 10,
        "perUser": 0.1,
        "users": 100,
        "state": "active"
    });

    Mock::given(method("POST"))
        .and(path("/multi-cheque"))
        .and(body_partial_json(json!({"chequePerUser": 0.1, "usersNumber": 100})))
        .respond_with(success(cheque.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/multi-cheque/77"))
        .respond_with(success(cheque.clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/multi-cheque/77"))
        .and(body_partial_json(json!({"description": "updated"})))
        .respond_with(success(cheque))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/multi-cheque/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let created = client
        .create_cheque(&CreateChequeRequest::new("TONCOIN", 0.1, 100))
        .await
        .unwrap();
    assert_eq!(created.state, ChequeState::Active);

    client.get_cheque(77).await.unwrap();
    client
        .edit_cheque(
            77,
            &rocketpay::models::EditChequeRequest {
                description: Some("updated".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client.delete_cheque(77).await.unwrap();
}

#[tokio::test]
async fn transfer_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app/transfer"))
        .and(body_partial_json(json!({
            "tgUserId": 1001,
            "transferId": "payout-17"
        })))
        .respond_with(success(json!({
            "id": 5012,
            "tgUserId": 1001,
            "currency": "TONCOIN",
            "amount": 2.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transfer = client_for(&server)
        .transfer(&CreateTransferRequest {
            tg_user_id: 1001,
            currency: "TONCOIN".to_string(),
            amount: 2.5,
            transfer_id: "payout-17".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(transfer.id, 5012);
}

#[tokio::test]
async fn withdrawal_status_and_fees() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app/withdrawal"))
        .respond_with(success(json!({
            "network": "TON",
            "address": "EQB0_address",
            "currency": "TONCOIN",
            "amount": 100,
            "withdrawalId": "w-1",
            "status": "CREATED"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/app/withdrawal/status/w-1"))
        .respond_with(success(json!({
            "network": "TON",
            "address": "EQB0_address",
            "currency": "TONCOIN",
            "amount": 100,
            "withdrawalId": "w-1",
            "status": "COMPLETED",
            "txHash": "abc123"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/app/withdrawal/fees"))
        .and(query_param("currency", "TONCOIN"))
        .respond_with(success(json!([
            {"currency": "TONCOIN", "minWithdraw": 2, "fees": [
                {"networkCode": "TON", "fee": 0.07, "feeCurrency": "TONCOIN"}
            ]}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let created = client
        .withdrawal(&CreateWithdrawalRequest {
            network: "TON".to_string(),
            address: "EQB0_address".to_string(),
            currency: "TONCOIN".to_string(),
            amount: 100.0,
            withdrawal_id: "w-1".to_string(),
            comment: None,
        })
        .await
        .unwrap();
    assert_eq!(created.status, WithdrawalStatus::Created);

    let status = client.withdrawal_status("w-1").await.unwrap();
    assert_eq!(status.status, WithdrawalStatus::Completed);
    assert_eq!(status.tx_hash.as_deref(), Some("abc123"));

    let fees = client.withdrawal_fees(Some("TONCOIN")).await.unwrap();
    assert_eq!(fees[0].fees[0].fee, 0.07);
}

#[tokio::test]
async fn api_failure_surfaces_message_and_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tg-invoices"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Validation failed",
            "errors": [{"property": "amount", "error": "must be positive"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_invoice(&CreateInvoiceRequest::new(-1.0, "TONCOIN"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ApiErrorCode::InvalidRequest);
    assert_eq!(err.status, Some(400));
    assert_eq!(err.message, "Validation failed");
    assert_eq!(err.field_errors[0].property, "amount");
}

#[tokio::test]
async fn rejected_key_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/info"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).app_info().await.unwrap_err();

    assert_eq!(err.code, ApiErrorCode::Unauthorized);
}

#[tokio::test]
async fn envelope_failure_with_http_200_is_still_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currencies/available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Service temporarily disabled"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).available_currencies().await.unwrap_err();

    assert_eq!(err.message, "Service temporarily disabled");
}

#[tokio::test]
async fn non_envelope_failure_body_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/info"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).app_info().await.unwrap_err();

    assert_eq!(err.code, ApiErrorCode::ProviderError);
    assert_eq!(err.status, Some(502));
    assert!(err.retryable);
}
