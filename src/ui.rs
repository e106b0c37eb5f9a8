use crate::models::{ButtonState, CafeId};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const LIKE_BUTTON_ID: &str = "like-unlike";
pub const LIKED_CLASS: &str = "btn-primary";
pub const NOT_LIKED_CLASS: &str = "btn-outline-primary";

pub type SharedButton = Arc<Mutex<LikeButton>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeButton {
    id: String,
    name: Option<String>,
    classes: Vec<String>,
}

impl LikeButton {
    pub fn new(cafe_id: &CafeId, initial: ButtonState) -> Self {
        let mut button = Self {
            id: LIKE_BUTTON_ID.to_string(),
            name: Some(cafe_id.to_string()),
            classes: vec!["btn".to_string()],
        };
        match initial {
            ButtonState::Liked => button.fill_like(),
            ButtonState::NotLiked => button.unfill_like(),
        }
        button
    }

    pub fn from_parts(
        id: impl Into<String>,
        name: Option<String>,
        classes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn into_shared(self) -> SharedButton {
        Arc::new(Mutex::new(self))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn state(&self) -> ButtonState {
        ButtonState::from_liked(self.has_class(LIKED_CLASS))
    }

    pub fn fill_like(&mut self) {
        self.remove_class(NOT_LIKED_CLASS);
        self.add_class(LIKED_CLASS);
    }

    pub fn unfill_like(&mut self) {
        self.remove_class(LIKED_CLASS);
        self.add_class(NOT_LIKED_CLASS);
    }

    pub fn to_html(&self) -> String {
        let name = self
            .name
            .as_deref()
            .map(|name| format!(r#" name="{}""#, escape_attr(name)))
            .unwrap_or_default();
        let label = match self.state() {
            ButtonState::Liked => "Unlike",
            ButtonState::NotLiked => "Like",
        };

        BUTTON_HTML
            .replace("{{ID}}", &escape_attr(&self.id))
            .replace("{{NAME}}", &name)
            .replace("{{CLASS}}", &escape_attr(&self.classes.join(" ")))
            .replace("{{LABEL}}", label)
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

const BUTTON_HTML: &str = r#"<button id="{{ID}}"{{NAME}} class="{{CLASS}}">{{LABEL}}</button>"#;
