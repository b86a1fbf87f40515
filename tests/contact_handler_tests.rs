use chrono::Utc;
use mockall::mock;
use serde_json::json;

use portfolio_api::entities::contact::{ContactInsert, ContactMessage, NewContactRequest};
use portfolio_api::errors::AppError;
use portfolio_api::use_cases::contact::ContactHandler;

mock! {
    pub ContactRepo {}

    #[async_trait::async_trait]
    impl portfolio_api::repositories::contact::ContactRepository for ContactRepo {
        async fn create_contact_message(&self, msg: &ContactInsert) -> Result<i32, AppError>;
        async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
    }
}

fn request(body: serde_json::Value) -> NewContactRequest {
    serde_json::from_value(body).unwrap()
}

#[tokio::test]
async fn valid_submission_returns_confirmation_and_id() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .withf(|msg| msg.name == "Ada" && msg.email == "ada@example.com")
        .returning(|_| Ok(42));

    let handler = ContactHandler::new(repo);

    let response = handler
        .create_contact_message(request(json!({
            "name": " Ada ",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "I would like to talk about a project."
        })))
        .await
        .unwrap();

    assert_eq!(response.id, 42);
    assert_eq!(response.message, "Contact message sent successfully");
}

#[tokio::test]
async fn invalid_submission_never_reaches_storage() {
    // no expectations: any repository call fails the test
    let repo = MockContactRepo::new();
    let handler = ContactHandler::new(repo);

    let err = handler
        .create_contact_message(request(json!({
            "name": "Ada",
            "email": "not-an-email",
            "subject": "Hello",
            "message": "I would like to talk about a project."
        })))
        .await
        .unwrap_err();

    assert!(matches!(&err, AppError::Validation(msg) if msg == "Invalid email format"));
}

#[tokio::test]
async fn listing_passes_through_the_stored_order() {
    let mut repo = MockContactRepo::new();
    repo.expect_list_contact_messages().returning(|| {
        let now = Utc::now();
        Ok(vec![
            ContactMessage {
                id: 2,
                name: "B".to_string(),
                email: "b@example.com".to_string(),
                subject: "Later".to_string(),
                message: "second message".to_string(),
                created_at: now,
            },
            ContactMessage {
                id: 1,
                name: "A".to_string(),
                email: "a@example.com".to_string(),
                subject: "Earlier".to_string(),
                message: "first message".to_string(),
                created_at: now - chrono::Duration::minutes(5),
            },
        ])
    });

    let handler = ContactHandler::new(repo);

    let messages = handler.list_contact_messages().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].created_at >= messages[1].created_at);
}
