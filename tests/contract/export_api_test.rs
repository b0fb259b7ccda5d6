// Contract tests for GET /api/events/{event_id}/export/csv

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use helpers::*;
use rust_decimal_macros::dec;
use serde_json::Value;

fn parse_csv(body: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(body);
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[actix_web::test]
async fn test_export_csv_task_list() {
    let repo = InMemoryEventRepository::new().with_event(
        TestDataFactory::event(7, "Boda Ruiz"),
        vec![
            TestDataFactory::quote_item("Silla Tiffany", "Mobiliario", 120, dec!(35)),
            TestDataFactory::quote_item("Mesero", "Personal", 8, dec!(600)),
            TestDataFactory::quote_item("Mesa redonda", "Mobiliario", 12, dec!(150)),
        ],
    );
    let state = test_state(repo);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/events/7/export/csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert!(resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("event-7-tasks.csv"));

    let body = test::read_body(resp).await;
    let (headers, rows) = parse_csv(&body);

    assert_eq!(headers[0], "Task Name");
    assert_eq!(headers.last().unwrap(), "Cost");
    assert_eq!(rows.len(), 5);

    let names: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Boda Ruiz",
            "Silla Tiffany",
            "Mesa redonda",
            "Mesero",
            "Post-event follow-up"
        ]
    );

    // 4200 + 1800 + 4800 = 10800, plus 16% tax
    assert_eq!(rows[0][7], "12528.00");
    assert_eq!(rows[1][7], "4200.00");
}

#[actix_web::test]
async fn test_export_csv_without_items_has_two_rows() {
    let repo = InMemoryEventRepository::new().with_event(TestDataFactory::event(3, "Gala"), vec![]);
    let state = test_state(repo);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/events/3/export/csv")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let (headers, rows) = parse_csv(&body);

    assert_eq!(headers.len(), 8);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][2], "Event");
    assert_eq!(rows[1][2], "Post-event");
}

#[actix_web::test]
async fn test_export_csv_escapes_commas_and_quotes() {
    let name = "Mantel \"premium\", blanco";
    let repo = InMemoryEventRepository::new().with_event(
        TestDataFactory::event(9, "XV, Sofía"),
        vec![TestDataFactory::quote_item(name, "Mantelería", 12, dec!(80))],
    );
    let state = test_state(repo);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/events/9/export/csv")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("\"Mantel \"\"premium\"\", blanco\""));
    assert!(text.contains("\"XV, Sofía\""));

    let (_, rows) = parse_csv(&body);
    assert_eq!(rows[0][0], "XV, Sofía");
    assert_eq!(rows[1][0], name);
}

#[actix_web::test]
async fn test_export_csv_unknown_event_is_not_found() {
    let state = test_state(InMemoryEventRepository::new());
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/events/404/export/csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn test_export_csv_non_numeric_id_is_not_found() {
    let state = test_state(InMemoryEventRepository::new());
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/events/abc/export/csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_export_csv_too_many_rows() {
    let items = (0..1000)
        .map(|i| TestDataFactory::quote_item(&format!("Item {}", i), "Misc", 1, dec!(1)))
        .collect();
    let repo = InMemoryEventRepository::new().with_event(TestDataFactory::event(11, "Congreso"), items);
    let state = test_state(repo);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/events/11/export/csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
}

#[actix_web::test]
async fn test_export_csv_repository_failure_is_generic_500() {
    let state = test_state(InMemoryEventRepository::failing());
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/events/1/export/csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Internal server error");
}
