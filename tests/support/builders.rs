// tests/support/builders.rs
use medee::application::commands::categories::CreateCategoryCommand;
use medee::application::commands::news::CreateNewsCommand;
use medee::application::dto::{CategoryDto, NewsDto};
use medee::domain::session::Session;

use super::helpers::TestApp;

pub async fn create_category(app: &TestApp, admin: &Session, name: &str) -> CategoryDto {
    app.services
        .category_commands
        .create_category(Some(admin), CreateCategoryCommand { name: name.into() })
        .await
        .expect("create category")
}

/// Defaults to a published story without a cover.
pub struct NewsBuilder {
    title: String,
    content: String,
    category_id: i64,
    cover_image: Option<String>,
    published: bool,
}

impl NewsBuilder {
    pub fn new(category_id: i64) -> Self {
        Self {
            title: "Шинэ мэдээ".into(),
            content: "Мэдээний агуулга".into(),
            category_id,
            cover_image: None,
            published: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn cover(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn command(self) -> CreateNewsCommand {
        let mut builder = CreateNewsCommand::builder()
            .title(self.title)
            .content(self.content)
            .category_id(self.category_id)
            .published(self.published);
        if let Some(url) = self.cover_image {
            builder = builder.cover_image(url);
        }
        builder.build().expect("complete command")
    }

    pub async fn create(self, app: &TestApp, admin: &Session) -> NewsDto {
        app.services
            .news_commands
            .create_news(Some(admin), self.command())
            .await
            .expect("create news")
    }
}
