use portfolio_api::entities::project::{NewProjectRequest, ProjectInsert, UpdateProjectRequest};
use portfolio_api::entities::option_fields::OptionField;
use portfolio_api::errors::AppError;
use serde_json::json;

fn assert_missing_required(err: AppError) {
    assert!(
        matches!(&err, AppError::Validation(msg) if msg == "Missing required fields"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn create_with_all_required_fields_passes_validation() {
    let request: NewProjectRequest = serde_json::from_value(json!({
        "title": "Weather dashboard",
        "description": "Realtime weather dashboard",
        "technologies": ["React", "Node.js"]
    }))
    .unwrap();

    let insert = ProjectInsert::try_from(request).unwrap();

    assert_eq!(insert.title, "Weather dashboard");
    assert_eq!(insert.description, "Realtime weather dashboard");
    assert_eq!(
        insert.technologies.as_deref(),
        Some(&["React".to_string(), "Node.js".to_string()][..])
    );
    assert_eq!(insert.image_url, None);
    assert_eq!(insert.project_url, None);
    assert_eq!(insert.github_url, None);
}

#[test]
fn create_keeps_supplied_optional_fields() {
    let request: NewProjectRequest = serde_json::from_value(json!({
        "title": "Weather dashboard",
        "description": "Realtime weather dashboard",
        "imageUrl": "/weather.png",
        "githubUrl": "https://github.com/me/weather",
        "technologies": ["React"]
    }))
    .unwrap();

    let insert = ProjectInsert::try_from(request).unwrap();

    assert_eq!(insert.image_url.as_deref(), Some("/weather.png"));
    assert_eq!(insert.project_url, None);
    assert_eq!(
        insert.github_url.as_deref(),
        Some("https://github.com/me/weather")
    );
}

#[test]
fn create_rejects_missing_title() {
    let request: NewProjectRequest = serde_json::from_value(json!({
        "description": "No title",
        "technologies": ["React"]
    }))
    .unwrap();

    assert_missing_required(ProjectInsert::try_from(request).unwrap_err());
}

#[test]
fn create_rejects_empty_title_and_description() {
    for body in [
        json!({"title": "", "description": "D", "technologies": ["React"]}),
        json!({"title": "T", "description": "", "technologies": ["React"]}),
    ] {
        let request: NewProjectRequest = serde_json::from_value(body).unwrap();
        assert_missing_required(ProjectInsert::try_from(request).unwrap_err());
    }
}

#[test]
fn create_rejects_absent_and_empty_technologies_alike() {
    let omitted: NewProjectRequest = serde_json::from_value(json!({
        "title": "T",
        "description": "D"
    }))
    .unwrap();
    assert_missing_required(ProjectInsert::try_from(omitted).unwrap_err());

    let empty: NewProjectRequest = serde_json::from_value(json!({
        "title": "T",
        "description": "D",
        "technologies": []
    }))
    .unwrap();
    assert_missing_required(ProjectInsert::try_from(empty).unwrap_err());
}

#[test]
fn create_rejects_blank_technology_tokens() {
    let request: NewProjectRequest = serde_json::from_value(json!({
        "title": "T",
        "description": "D",
        "technologies": ["React", "   "]
    }))
    .unwrap();

    assert_missing_required(ProjectInsert::try_from(request).unwrap_err());
}

#[test]
fn update_payload_distinguishes_omitted_null_and_value() {
    let patch: UpdateProjectRequest = serde_json::from_value(json!({
        "title": "New title",
        "imageUrl": null
    }))
    .unwrap();

    assert_eq!(patch.title, OptionField::SetToValue("New title".to_string()));
    assert_eq!(patch.image_url, OptionField::SetToNull);
    assert!(patch.description.is_unchanged());
    assert!(patch.project_url.is_unchanged());
    assert!(patch.github_url.is_unchanged());
    assert!(patch.technologies.is_unchanged());
}

#[test]
fn empty_update_payload_is_valid() {
    let patch: UpdateProjectRequest = serde_json::from_value(json!({})).unwrap();

    assert!(patch.validate().is_ok());
}

#[test]
fn update_rejects_supplied_blank_required_fields() {
    for body in [
        json!({"title": ""}),
        json!({"title": null}),
        json!({"description": ""}),
        json!({"description": null}),
        json!({"technologies": []}),
        json!({"technologies": null}),
        json!({"technologies": ["React", ""]}),
    ] {
        let patch: UpdateProjectRequest = serde_json::from_value(body.clone()).unwrap();
        assert_missing_required(
            patch
                .validate()
                .expect_err(&format!("expected rejection for {body}")),
        );
    }
}

#[test]
fn update_allows_nulling_optional_fields() {
    let patch: UpdateProjectRequest = serde_json::from_value(json!({
        "imageUrl": null,
        "projectUrl": null,
        "githubUrl": null
    }))
    .unwrap();

    assert!(patch.validate().is_ok());
    assert!(patch.image_url.is_set_to_null());
}

#[test]
fn update_accepts_partial_required_fields() {
    let patch: UpdateProjectRequest = serde_json::from_value(json!({
        "description": "Rewritten",
        "technologies": ["Rust"]
    }))
    .unwrap();

    assert!(patch.validate().is_ok());
    assert_eq!(patch.technologies.value_ref().unwrap(), &["Rust".to_string()]);
}
