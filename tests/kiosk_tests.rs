mod common;

use absensi_portal::api::{CheckInOutcome, RegistrationForm};
use absensi_portal::errors::AppError;
use absensi_portal::kiosk;
use absensi_portal::ui::NoticeLevel;
use common::{MockApi, MockCamera};

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "Rizki Allam".to_string(),
        external_id: "123456".to_string(),
        class_label: "12 RPL".to_string(),
    }
}

#[tokio::test]
async fn check_in_greets_the_recognized_student() {
    let api = MockApi::default();
    api.push_checkin(Ok(CheckInOutcome::Recognized {
        student_name: "Rizki Allam".to_string(),
    }));
    let camera = MockCamera::ready();

    let notice = kiosk::check_in(&camera, &api, "").await.expect("check-in");
    assert_eq!(notice.level, NoticeLevel::Success);
    assert!(notice.text.contains("Rizki Allam"));
}

// Scenario: the benign duplicate is an informational banner carrying
// the server's exact message, not an error.
#[tokio::test]
async fn duplicate_check_in_is_informational() {
    let api = MockApi::default();
    api.push_checkin(Ok(CheckInOutcome::AlreadyCheckedIn {
        message: "Already checked in".to_string(),
    }));
    let camera = MockCamera::ready();

    let notice = kiosk::check_in(&camera, &api, "Penjas").await.expect("info");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.text, "Already checked in");
    assert!(!notice.is_error());
}

#[tokio::test]
async fn offline_camera_fails_before_any_network_call() {
    let api = MockApi::default(); // empty script: a network call would panic
    let camera = MockCamera::offline();

    let err = kiosk::check_in(&camera, &api, "").await.expect_err("no camera");
    assert!(matches!(err, AppError::CaptureUnavailable(_)));

    let err = kiosk::register(&camera, &api, &valid_form())
        .await
        .expect_err("no camera");
    assert!(matches!(err, AppError::CaptureUnavailable(_)));
    assert!(api.register_log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn registration_validates_before_capture_and_network() {
    let api = MockApi::default();
    let camera = MockCamera::ready();

    let mut form = valid_form();
    form.class_label = " ".to_string();

    let err = kiosk::register(&camera, &api, &form)
        .await
        .expect_err("incomplete form");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(camera.capture_count(), 0);
    assert!(api.register_log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn successful_registration_clears_the_form() {
    let api = MockApi::default();
    api.push_register(Ok(()));
    let camera = MockCamera::ready();

    let (notice, cleared) = kiosk::register(&camera, &api, &valid_form())
        .await
        .expect("register");
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(cleared, RegistrationForm::default());
    assert_eq!(camera.capture_count(), 1);

    let log = api.register_log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].external_id, "123456");
}

#[tokio::test]
async fn backend_conflict_is_surfaced_verbatim() {
    let api = MockApi::default();
    api.push_register(Err(AppError::Conflict(
        "Face already registered as 'Budi'".to_string(),
    )));
    let camera = MockCamera::ready();

    let err = kiosk::register(&camera, &api, &valid_form())
        .await
        .expect_err("conflict");
    assert_eq!(err.user_message(), "Face already registered as 'Budi'");
}

#[tokio::test]
async fn blank_subject_defaults_to_gate_check_in() {
    let api = MockApi::default();
    api.push_checkin(Ok(CheckInOutcome::Recognized {
        student_name: "Sari".to_string(),
    }));
    let camera = MockCamera::ready();

    // the kiosk main page has no subject picker: blank means gate entry
    kiosk::check_in(&camera, &api, "   ").await.expect("gate check-in");
    assert_eq!(api.checkin_log.lock().unwrap().as_slice(), ["-"]);
}
