use crate::api::LikesApi;
use crate::errors::LikeError;
use crate::handlers::{update_liked_cafe, ClickEvent};
use crate::models::ToggleOutcome;
use crate::ui::SharedButton;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;

pub struct Binding<A> {
    api: Arc<A>,
    button: SharedButton,
}

pub fn bind<A>(api: Arc<A>, button: SharedButton) -> Binding<A>
where
    A: LikesApi + 'static,
{
    Binding { api, button }
}

impl<A> Binding<A>
where
    A: LikesApi + 'static,
{
    pub fn button(&self) -> &SharedButton {
        &self.button
    }

    // Overlapping invocations are not serialized; dropping the handle does
    // not cancel one.
    pub fn dispatch(&self, event: ClickEvent) -> JoinHandle<Result<ToggleOutcome, LikeError>> {
        let api = Arc::clone(&self.api);
        let button = Arc::clone(&self.button);
        tokio::spawn(async move {
            let result = update_liked_cafe(&event, api.as_ref(), &button).await;
            if let Err(err) = &result {
                warn!(cafe_id = ?event.attr("name"), "like toggle failed, button left unchanged: {err}");
            }
            result
        })
    }

    pub fn unbind(self) -> SharedButton {
        self.button
    }
}
