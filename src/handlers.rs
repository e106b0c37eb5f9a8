use crate::api::LikesApi;
use crate::errors::LikeError;
use crate::models::{ButtonState, CafeId, ToggleOutcome};
use crate::ui::{LikeButton, SharedButton};
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::info;

/// Clones share the same default-prevented flag, so the dispatcher can still
/// observe it after the event has moved into a handler task.
#[derive(Debug, Clone, Default)]
pub struct ClickEvent {
    target_attrs: HashMap<String, String>,
    default_prevented: Arc<AtomicBool>,
}

impl ClickEvent {
    pub fn new(target_attrs: HashMap<String, String>) -> Self {
        Self {
            target_attrs,
            default_prevented: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_button(button: &LikeButton) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), button.id().to_string());
        if let Some(name) = button.name() {
            attrs.insert("name".to_string(), name.to_string());
        }
        Self::new(attrs)
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), name.into());
        Self::new(attrs)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.target_attrs.get(key).map(String::as_str)
    }

    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

pub async fn update_liked_cafe<A>(
    event: &ClickEvent,
    api: &A,
    button: &SharedButton,
) -> Result<ToggleOutcome, LikeError>
where
    A: LikesApi + ?Sized,
{
    event.prevent_default();

    let cafe_id = event
        .attr("name")
        .and_then(CafeId::parse)
        .ok_or(LikeError::MissingCafeId)?;

    let liked = api.like_status(&cafe_id).await?;

    let (response, state) = if liked {
        let response = api.unlike(&cafe_id).await?;
        button.lock().await.unfill_like();
        (response, ButtonState::NotLiked)
    } else {
        let response = api.like(&cafe_id).await?;
        button.lock().await.fill_like();
        (response, ButtonState::Liked)
    };

    info!(%cafe_id, %state, "like toggled");

    Ok(ToggleOutcome {
        cafe_id,
        state,
        response,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ui::{LIKED_CLASS, NOT_LIKED_CLASS};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use std::sync::Mutex as StdMutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Call {
        Status(String),
        Like(String),
        Unlike(String),
    }

    /// Records every call and answers with a fixed status.
    #[derive(Default)]
    pub(crate) struct FakeApi {
        pub liked: bool,
        pub fail_status: bool,
        pub fail_mutation: bool,
        pub calls: StdMutex<Vec<Call>>,
    }

    impl FakeApi {
        pub(crate) fn liked(liked: bool) -> Self {
            Self {
                liked,
                ..Self::default()
            }
        }

        pub(crate) fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn failure() -> LikeError {
            LikeError::status(StatusCode::INTERNAL_SERVER_ERROR, "boom")
        }
    }

    #[async_trait]
    impl LikesApi for FakeApi {
        async fn like_status(&self, cafe_id: &CafeId) -> Result<bool, LikeError> {
            self.record(Call::Status(cafe_id.to_string()));
            if self.fail_status {
                return Err(Self::failure());
            }
            Ok(self.liked)
        }

        async fn like(&self, cafe_id: &CafeId) -> Result<Value, LikeError> {
            self.record(Call::Like(cafe_id.to_string()));
            if self.fail_mutation {
                return Err(Self::failure());
            }
            Ok(json!({ "liked": cafe_id }))
        }

        async fn unlike(&self, cafe_id: &CafeId) -> Result<Value, LikeError> {
            self.record(Call::Unlike(cafe_id.to_string()));
            if self.fail_mutation {
                return Err(Self::failure());
            }
            Ok(json!({ "unliked": cafe_id }))
        }
    }

    fn button(id: &str, state: ButtonState) -> SharedButton {
        LikeButton::new(&CafeId::parse(id).unwrap(), state).into_shared()
    }

    #[tokio::test]
    async fn liked_cafe_gets_unliked() {
        let api = FakeApi::liked(true);
        let button = button("42", ButtonState::Liked);
        let event = ClickEvent::with_name("42");

        let outcome = update_liked_cafe(&event, &api, &button).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Status("42".into()), Call::Unlike("42".into())]
        );
        assert_eq!(outcome.state, ButtonState::NotLiked);
        assert_eq!(outcome.response, json!({ "unliked": "42" }));
        let button = button.lock().await;
        assert!(button.has_class(NOT_LIKED_CLASS));
        assert!(!button.has_class(LIKED_CLASS));
    }

    #[tokio::test]
    async fn unliked_cafe_gets_liked() {
        let api = FakeApi::liked(false);
        let button = button("7", ButtonState::NotLiked);
        let event = ClickEvent::with_name("7");

        let outcome = update_liked_cafe(&event, &api, &button).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Status("7".into()), Call::Like("7".into())]
        );
        assert_eq!(outcome.cafe_id.as_str(), "7");
        assert_eq!(outcome.state, ButtonState::Liked);
        let button = button.lock().await;
        assert!(button.has_class(LIKED_CLASS));
        assert!(!button.has_class(NOT_LIKED_CLASS));
    }

    #[tokio::test]
    async fn status_failure_skips_mutation_and_keeps_state() {
        let api = FakeApi {
            fail_status: true,
            ..FakeApi::default()
        };
        let button = button("5", ButtonState::NotLiked);
        let before = button.lock().await.clone();
        let event = ClickEvent::with_name("5");

        let err = update_liked_cafe(&event, &api, &button).await.unwrap_err();

        assert!(matches!(err, LikeError::Status { .. }));
        assert!(event.default_prevented());
        assert_eq!(api.calls(), vec![Call::Status("5".into())]);
        assert_eq!(*button.lock().await, before);
    }

    #[tokio::test]
    async fn mutation_failure_keeps_state() {
        let api = FakeApi {
            liked: true,
            fail_mutation: true,
            ..FakeApi::default()
        };
        let button = button("9", ButtonState::Liked);
        let event = ClickEvent::with_name("9");

        assert!(update_liked_cafe(&event, &api, &button).await.is_err());

        assert!(event.default_prevented());
        assert_eq!(
            api.calls(),
            vec![Call::Status("9".into()), Call::Unlike("9".into())]
        );
        assert_eq!(button.lock().await.state(), ButtonState::Liked);
    }

    #[tokio::test]
    async fn name_attribute_is_sent_unchanged() {
        let api = FakeApi::liked(false);
        let button = button("42", ButtonState::NotLiked);
        let event = ClickEvent::with_name(" 42 ");

        let outcome = update_liked_cafe(&event, &api, &button).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Status(" 42 ".into()), Call::Like(" 42 ".into())]
        );
        assert_eq!(outcome.cafe_id.as_str(), " 42 ");
    }

    #[tokio::test]
    async fn missing_name_makes_no_requests() {
        let api = FakeApi::liked(false);
        let button = button("1", ButtonState::NotLiked);
        let event = ClickEvent::default();

        let err = update_liked_cafe(&event, &api, &button).await.unwrap_err();

        assert!(matches!(err, LikeError::MissingCafeId));
        assert!(event.default_prevented());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn default_is_prevented_on_success() {
        let api = FakeApi::liked(false);
        let shared = button("11", ButtonState::NotLiked);
        let event = ClickEvent::from_button(&*shared.lock().await);

        update_liked_cafe(&event, &api, &shared).await.unwrap();

        assert!(event.default_prevented());
        assert_eq!(event.attr("id"), Some("like-unlike"));
    }
}
