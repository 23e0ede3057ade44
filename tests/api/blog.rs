use serde_json::Value;

use crate::helpers::spawn_app;

fn slugs(posts: &Value) -> Vec<&str> {
    posts
        .as_array()
        .expect("posts should be an array")
        .iter()
        .map(|post| post["slug"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn listing_without_category_returns_every_post() {
    let app = spawn_app().await;

    let response = app.get_blog("").await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["category"], "All");
    assert_eq!(
        slugs(&body["posts"]),
        vec![
            "getting-started-with-pytorch",
            "intro-to-ctf-recon-with-bloodhound",
            "building-secure-ssl-chatroom-in-c",
            "computer-vision-for-beginners",
            "ethical-ai-building-responsible-systems",
            "deploying-ml-models-with-fastapi",
        ]
    );
}

#[tokio::test]
async fn listing_exposes_the_fixed_category_set() {
    let app = spawn_app().await;

    let body: Value = app.get_blog("").await.json().await.unwrap();

    assert_eq!(
        body["categories"],
        serde_json::json!(["All", "Tutorial", "Security", "Programming", "Ethics", "DevOps"])
    );
}

#[tokio::test]
async fn security_category_returns_the_bloodhound_post() {
    let app = spawn_app().await;

    let body: Value = app.get_blog("?category=Security").await.json().await.unwrap();

    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Intro to CTF Recon with BloodHound");
    assert_eq!(posts[0]["readTime"], "12 min read");
}

#[tokio::test]
async fn featured_posts_ignore_the_selected_category() {
    let app = spawn_app().await;

    for category in ["All", "Tutorial", "Security", "Programming", "Ethics", "DevOps"] {
        let body: Value = app
            .get_blog(&format!("?category={category}"))
            .await
            .json()
            .await
            .unwrap();

        assert_eq!(
            slugs(&body["featured"]),
            vec!["getting-started-with-pytorch", "computer-vision-for-beginners"],
            "Featured posts changed when {category} was selected."
        );
    }
}

#[tokio::test]
async fn unknown_category_is_rejected_with_400() {
    let app = spawn_app().await;

    for query in ["?category=Gardening", "?category=security", "?category="] {
        let response = app.get_blog(query).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request for {query}."
        );
    }
}

#[tokio::test]
async fn post_is_served_by_slug() {
    let app = spawn_app().await;

    let response = app.get_post("computer-vision-for-beginners").await;

    assert_eq!(200, response.status().as_u16());
    let post: Value = response.json().await.unwrap();
    assert_eq!(post["title"], "Computer Vision for Beginners");
    assert_eq!(post["category"], "Tutorial");
    assert_eq!(post["featured"], true);
    assert_eq!(
        post["tags"],
        serde_json::json!(["Computer Vision", "OpenCV", "Image Processing", "Python"])
    );
}

#[tokio::test]
async fn unknown_slug_returns_404() {
    let app = spawn_app().await;

    let response = app.get_post("no-such-post").await;

    assert_eq!(404, response.status().as_u16());
}
