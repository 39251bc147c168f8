use std::future::IntoFuture;
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use fake::faker::address::en::CityName;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use serde_json::Value;
use uuid::Uuid;

use crate::features::reports::dtos::MAX_SUBMISSION_BODY_SIZE;
use crate::features::reports::models::{NewReport, ReportType};
use crate::features::reports::repositories::{InMemoryReportRepository, ReportRepository};
use crate::modules::storage::InMemoryContentStore;
use crate::shared::test_helpers::{file_part, png_part, report_form, ReportHarness};

fn damage_form() -> axum_test::multipart::MultipartForm {
    let location: String = CityName().fake();
    let description: String = Sentence(3..8).fake();
    report_form("Damage Assessment", &location, &description)
}

async fn list(harness: &ReportHarness) -> Vec<Value> {
    let response = harness.server.get("/reports").await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

#[tokio::test]
async fn test_submit_then_list_round_trip() {
    let harness = ReportHarness::new();

    for count in [0usize, 1, 5] {
        let mut form = damage_form();
        for i in 0..count {
            form = form.add_part("images", png_part(&format!("photo-{}.png", i)));
        }

        let response = harness.server.post("/reports/submit").multipart(form).await;
        response.assert_status(StatusCode::CREATED);

        let body = response.json::<Value>();
        assert_eq!(body["message"], "Report submitted successfully");
        assert_eq!(body["report"]["type"], "Damage Assessment");
        assert_eq!(body["report"]["images"].as_array().unwrap().len(), count);
    }

    let reports = list(&harness).await;
    assert_eq!(reports.len(), 3);

    for report in &reports {
        for image in report["images"].as_array().unwrap() {
            let path = image.as_str().unwrap();
            assert!(path.starts_with("/uploads/"));
            assert!(path.ends_with(".png"));

            let file = harness.server.get(path).await;
            file.assert_status_ok();
            assert_eq!(file.header("content-type"), "image/png");
        }
    }
}

#[tokio::test]
async fn test_images_keep_submission_order() {
    let harness = ReportHarness::new();

    let form = damage_form()
        .add_part("images", file_part("first.jpg", "image/jpeg", b"one".to_vec()))
        .add_part("images", file_part("second.png", "image/png", b"two".to_vec()))
        .add_part("images", file_part("third.gif", "image/gif", b"three".to_vec()));

    let body = harness
        .server
        .post("/reports/submit")
        .multipart(form)
        .await
        .json::<Value>();

    let images: Vec<&str> = body["report"]["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(images[0].ends_with(".jpg"));
    assert!(images[1].ends_with(".png"));
    assert!(images[2].ends_with(".gif"));

    let contents: Vec<_> = futures::future::join_all(
        images.iter().map(|path| harness.server.get(path).into_future()),
    )
    .await
    .into_iter()
    .map(|r| r.as_bytes().to_vec())
    .collect();
    assert_eq!(contents, vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]);
}

#[tokio::test]
async fn test_non_image_rejects_whole_submission() {
    let harness = ReportHarness::new();

    let form = damage_form()
        .add_part("images", png_part("a.png"))
        .add_part("images", file_part("scan.pdf", "application/pdf", b"%PDF".to_vec()))
        .add_part("images", png_part("b.png"));

    let response = harness.server.post("/reports/submit").multipart(form).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .contains("Only images are allowed"));

    assert!(list(&harness).await.is_empty());
    assert_eq!(harness.store.len(), 0);
}

#[tokio::test]
async fn test_sixth_image_is_rejected() {
    let harness = ReportHarness::new();

    let mut form = damage_form();
    for i in 0..6 {
        form = form.add_part("images", png_part(&format!("{}.png", i)));
    }

    let response = harness.server.post("/reports/submit").multipart(form).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(harness.repository.len(), 0);
    assert_eq!(harness.store.len(), 0);
}

#[tokio::test]
async fn test_oversized_image_is_rejected() {
    let harness = ReportHarness::new();

    let form = damage_form().add_part(
        "images",
        file_part("huge.jpg", "image/jpeg", vec![0u8; 5 * 1024 * 1024 + 1]),
    );

    let response = harness.server.post("/reports/submit").multipart(form).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(harness.store.len(), 0);
}

#[tokio::test]
async fn test_missing_fields_and_bad_type_are_rejected() {
    let harness = ReportHarness::new();

    let missing = axum_test::multipart::MultipartForm::new()
        .add_text("type", "Resource Needs")
        .add_text("location", "North bank")
        .add_part("images", png_part("a.png"));
    let response = harness.server.post("/reports/submit").multipart(missing).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "All fields are required");

    let bad_type = report_form("Flood", "North bank", "Water rising");
    harness
        .server
        .post("/reports/submit")
        .multipart(bad_type)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let stray_file = damage_form().add_part("attachment", png_part("a.png"));
    harness
        .server
        .post("/reports/submit")
        .multipart(stray_file)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(harness.repository.len(), 0);
    assert_eq!(harness.store.len(), 0);
}

#[tokio::test]
async fn test_body_over_limit_is_payload_too_large() {
    let harness = ReportHarness::new();

    let form = damage_form()
        .add_part("images", png_part("a.png"))
        .add_text("notes", "x".repeat(MAX_SUBMISSION_BODY_SIZE + 1));

    let response = harness.server.post("/reports/submit").multipart(form).await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let message = response.json::<Value>()["message"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert!(message.starts_with("Request body too large"));

    assert_eq!(harness.repository.len(), 0);
    assert_eq!(harness.store.len(), 0);
}

#[tokio::test]
async fn test_empty_file_input_is_skipped() {
    let harness = ReportHarness::new();

    let empty_input = axum_test::multipart::Part::bytes(Vec::new()).file_name("".to_string());
    let form = damage_form()
        .add_part("images", png_part("a.png"))
        .add_part("images", empty_input);

    let response = harness.server.post("/reports/submit").multipart(form).await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["report"]["images"].as_array().map(Vec::len), Some(1));
    assert_eq!(harness.store.len(), 1);
}

#[tokio::test]
async fn test_non_multipart_body_is_rejected() {
    let harness = ReportHarness::new();

    harness
        .server
        .post("/reports/submit")
        .json(&serde_json::json!({ "type": "General Incident" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_storage_failure_leaves_nothing_behind() {
    let harness = ReportHarness::with_backends(
        Arc::new(InMemoryReportRepository::new()),
        Arc::new(InMemoryContentStore::new().fail_writes_after(1)),
    );

    let form = damage_form()
        .add_part("images", png_part("a.png"))
        .add_part("images", png_part("b.png"));

    let response = harness.server.post("/reports/submit").multipart(form).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(harness.repository.len(), 0);
    assert_eq!(harness.store.len(), 0);
}

#[tokio::test]
async fn test_delete_unknown_report_is_not_found() {
    let harness = ReportHarness::new();
    harness
        .server
        .post("/reports/submit")
        .multipart(damage_form())
        .await
        .assert_status(StatusCode::CREATED);

    let response = harness
        .server
        .delete(&format!("/reports/{}", Uuid::now_v7()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Report not found");

    assert_eq!(list(&harness).await.len(), 1);
}

#[tokio::test]
async fn test_malformed_report_id_is_bad_request() {
    let harness = ReportHarness::new();

    harness
        .server
        .delete("/reports/not-a-uuid")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    harness
        .server
        .get("/reports/not-a-uuid")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_cascades_to_images() {
    let harness = ReportHarness::new();

    let form = damage_form()
        .add_part("images", png_part("a.png"))
        .add_part("images", png_part("b.png"));
    let body = harness
        .server
        .post("/reports/submit")
        .multipart(form)
        .await
        .json::<Value>();
    let id = body["report"]["_id"].as_str().unwrap().to_string();
    let images: Vec<String> = body["report"]["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert!(images.iter().all(|i| harness.store.contains(i)));

    harness
        .server
        .get(&format!("/reports/{}", id))
        .await
        .assert_status_ok();

    let response = harness.server.delete(&format!("/reports/{}", id)).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Report deleted successfully");
    assert_eq!(body["removedImages"], 2);

    assert!(images.iter().all(|i| !harness.store.contains(i)));
    for image in &images {
        harness
            .server
            .get(image)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
    assert!(list(&harness).await.is_empty());
}

#[tokio::test]
async fn test_delete_succeeds_when_image_already_gone() {
    let harness = ReportHarness::new();

    let form = damage_form()
        .add_part("images", png_part("a.png"))
        .add_part("images", png_part("b.png"));
    let body = harness
        .server
        .post("/reports/submit")
        .multipart(form)
        .await
        .json::<Value>();
    let id = body["report"]["_id"].as_str().unwrap().to_string();
    harness
        .store
        .remove_out_of_band(body["report"]["images"][0].as_str().unwrap());

    let response = harness.server.delete(&format!("/reports/{}", id)).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["removedImages"], 1);
    assert_eq!(body["missingImages"], 1);
    assert_eq!(body["failedImages"], 0);

    assert!(list(&harness).await.is_empty());
}

#[tokio::test]
async fn test_delete_succeeds_when_file_removal_fails() {
    let harness = ReportHarness::with_backends(
        Arc::new(InMemoryReportRepository::new()),
        Arc::new(InMemoryContentStore::new().fail_deletes()),
    );

    let body = harness
        .server
        .post("/reports/submit")
        .multipart(damage_form().add_part("images", png_part("a.png")))
        .await
        .json::<Value>();
    let id = body["report"]["_id"].as_str().unwrap().to_string();

    let response = harness.server.delete(&format!("/reports/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["failedImages"], 1);
    assert!(list(&harness).await.is_empty());
}

#[tokio::test]
async fn test_list_is_newest_first_regardless_of_insertion_order() {
    let harness = ReportHarness::new();
    let now = Utc::now();

    for (offset, location) in [(2, "middle"), (1, "newest"), (3, "oldest")] {
        harness
            .repository
            .insert(NewReport {
                id: Uuid::now_v7(),
                report_type: ReportType::GeneralIncident,
                location: location.to_string(),
                description: "Road blocked".to_string(),
                images: vec![],
                created_at: now - Duration::minutes(offset),
            })
            .await
            .unwrap();
    }

    let reports = list(&harness).await;
    let locations: Vec<&str> = reports
        .iter()
        .map(|r| r["location"].as_str().unwrap())
        .collect();
    assert_eq!(locations, vec!["newest", "middle", "oldest"]);

    let stamps: Vec<chrono::DateTime<Utc>> = reports
        .iter()
        .map(|r| r["createdAt"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
async fn test_concurrent_submissions_never_share_a_file_name() {
    let harness = ReportHarness::new();
    let submissions = 20;

    let requests = (0..submissions).map(|_| {
        let form = damage_form()
            .add_part("images", png_part("IMG_0001.png"))
            .add_part("images", png_part("IMG_0001.png"));
        harness
            .server
            .post("/reports/submit")
            .multipart(form)
            .into_future()
    });

    let responses = futures::future::join_all(requests).await;
    assert!(responses
        .iter()
        .all(|r| r.status_code() == StatusCode::CREATED));

    let mut references: Vec<String> = list(&harness)
        .await
        .iter()
        .flat_map(|r| r["images"].as_array().unwrap().clone())
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert_eq!(references.len(), submissions * 2);

    references.sort();
    references.dedup();
    assert_eq!(references.len(), submissions * 2);
    assert_eq!(harness.store.len(), submissions * 2);
}
