use medee::application::ApplicationError;
use medee::application::commands::categories::{DeleteCategoryCommand, UpdateCategoryCommand};
use medee::application::commands::news::{DeleteNewsCommand, UpdateNewsCommand};
use medee::application::queries::admin::ListNewsQuery;
use medee::domain::errors::DomainError;

mod support;

use support::{NewsBuilder, TestApp, create_category};

#[tokio::test]
async fn news_records_the_acting_admin_as_author() {
    let app = TestApp::new();
    let (_, admin) = app.admin().await;
    let category = create_category(&app, &admin, "Улс төр").await;

    let news = NewsBuilder::new(category.id)
        .title("Парламентын чуулган")
        .cover("https://cdn.news.mn/a.jpg")
        .create(&app, &admin)
        .await;

    assert_eq!(news.author_id, Some(i64::from(admin.principal.user_id)));
    assert_eq!(news.category_id, category.id);
    assert_eq!(news.cover_image.as_deref(), Some("https://cdn.news.mn/a.jpg"));
    assert!(news.published);
}

#[tokio::test]
async fn unknown_category_is_a_validation_error() {
    let app = TestApp::new();
    let (_, admin) = app.admin().await;

    let err = app
        .services
        .news_commands
        .create_news(Some(&admin), NewsBuilder::new(42).command())
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
    assert!(app.db.news_slugs().is_empty());
}

#[tokio::test]
async fn cover_must_be_a_web_url() {
    let app = TestApp::new();
    let (_, admin) = app.admin().await;
    let category = create_category(&app, &admin, "Спорт").await;

    let err = app
        .services
        .news_commands
        .create_news(
            Some(&admin),
            NewsBuilder::new(category.id).cover("file:///etc/passwd").command(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));

    let blank_cover = NewsBuilder::new(category.id)
        .cover("   ")
        .create(&app, &admin)
        .await;
    assert_eq!(blank_cover.cover_image, None);
}

#[tokio::test]
async fn update_can_move_news_between_categories() {
    let app = TestApp::new();
    let (_, admin) = app.admin().await;
    let sport = create_category(&app, &admin, "Спорт").await;
    let world = create_category(&app, &admin, "Дэлхий").await;
    let news = NewsBuilder::new(sport.id).title("Match").create(&app, &admin).await;

    let moved = app
        .services
        .news_commands
        .update_news(
            Some(&admin),
            UpdateNewsCommand {
                id: news.id,
                title: "Match".into(),
                content: "Full report".into(),
                category_id: world.id,
                cover_image: Some("https://cdn.news.mn/m.jpg".into()),
                published: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.category_id, world.id);
    assert_eq!(moved.slug, "match");
    assert_eq!(moved.cover_image.as_deref(), Some("https://cdn.news.mn/m.jpg"));
}

#[tokio::test]
async fn updating_missing_rows_is_not_found() {
    let app = TestApp::new();
    let (_, admin) = app.admin().await;

    let err = app
        .services
        .category_commands
        .update_category(
            Some(&admin),
            UpdateCategoryCommand {
                id: 77,
                name: "x".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = app
        .services
        .news_commands
        .delete_news(Some(&admin), DeleteNewsCommand { id: 77 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn category_with_news_cannot_be_deleted() {
    let app = TestApp::new();
    let (_, admin) = app.admin().await;
    let category = create_category(&app, &admin, "Спорт").await;
    let news = NewsBuilder::new(category.id).create(&app, &admin).await;

    let err = app
        .services
        .category_commands
        .delete_category(Some(&admin), DeleteCategoryCommand { id: category.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))), "got {err:?}");

    app.services
        .news_commands
        .delete_news(Some(&admin), DeleteNewsCommand { id: news.id })
        .await
        .unwrap();
    app.services
        .category_commands
        .delete_category(Some(&admin), DeleteCategoryCommand { id: category.id })
        .await
        .unwrap();
    assert!(app.db.category_slugs().is_empty());
}

#[tokio::test]
async fn admin_listing_includes_drafts_and_filters() {
    let app = TestApp::new();
    let (_, admin) = app.admin().await;
    let sport = create_category(&app, &admin, "Спорт").await;
    let world = create_category(&app, &admin, "Дэлхий").await;
    NewsBuilder::new(sport.id).title("Published").create(&app, &admin).await;
    let draft = NewsBuilder::new(sport.id)
        .title("Draft")
        .draft()
        .create(&app, &admin)
        .await;
    NewsBuilder::new(world.id).title("Abroad").create(&app, &admin).await;

    let queries = &app.services.admin_queries;
    let all = queries
        .list_news(Some(&admin), ListNewsQuery::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title, "Abroad");

    let drafts = queries
        .list_news(
            Some(&admin),
            ListNewsQuery {
                category_id: None,
                published: Some(false),
            },
        )
        .await
        .unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].id, draft.id);

    let in_sport = queries
        .list_news(
            Some(&admin),
            ListNewsQuery {
                category_id: Some(sport.id),
                published: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(in_sport.len(), 2);

    let fetched = queries.get_news(Some(&admin), draft.id).await.unwrap();
    assert_eq!(fetched.slug, "draft");
    assert!(!fetched.published);

    let counts = queries.list_categories(Some(&admin)).await.unwrap();
    let sport_row = counts.iter().find(|c| c.id == sport.id).unwrap();
    assert_eq!(sport_row.news_count, 2);
}
