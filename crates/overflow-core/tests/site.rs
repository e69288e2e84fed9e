//! End-to-end flows through the site facade.

use overflow_core::auth::Claims;
use overflow_core::error::AuthError;
use overflow_core::repo::Vote;
use overflow_core::validation::{BlogDraft, FollowDraft, ProfileEdit, QuestionDraft, SignupDraft};
use overflow_core::{
    Credentials, Error, ListParams, MemoryStore, PasswordHasher, RecordId, Role, Site,
};

/// Reversible stand-in for a real password hash.
struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> overflow_core::Result<String> {
        Ok(format!("plain:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> overflow_core::Result<bool> {
        Ok(hash == format!("plain:{}", password))
    }
}

async fn site_with_users(names: &[&str]) -> (Site<MemoryStore>, Vec<Claims>) {
    let site = Site::new(MemoryStore::new());
    let mut claims = Vec::new();
    for name in names {
        let profile = site
            .signup(&SignupDraft::new(*name, "password1"), &PlainHasher)
            .await
            .unwrap();
        claims.push(site.claims_for(&profile.id).await.unwrap());
    }
    (site, claims)
}

fn draft(title: &str, tags: &[&str]) -> QuestionDraft {
    QuestionDraft {
        title: Some(title.to_string()),
        text: Some("a question body that is long enough".to_string()),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

async fn make_admin(site: &Site<MemoryStore>, claims: &Claims) -> Claims {
    site.set_role(claims.username.as_str(), Role::Admin).await.unwrap();
    site.claims_for(&claims.id).await.unwrap()
}

#[tokio::test]
async fn signup_and_authenticate() {
    let site = Site::new(MemoryStore::new());
    let profile = site
        .signup(&SignupDraft::new("Alice", "password1"), &PlainHasher)
        .await
        .unwrap();
    assert_eq!(profile.username.as_str(), "alice");
    assert_eq!(profile.role, Role::User);
    assert!(profile.profile_photo.contains(profile.id.as_str()));

    let err = site
        .signup(&SignupDraft::new("alice", "password2"), &PlainHasher)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_body()["message"], "Username already exists.");

    let ok = site
        .authenticate(&Credentials::new("ALICE", "password1"), &PlainHasher)
        .await
        .unwrap();
    assert_eq!(ok.id, profile.id);

    let err = site
        .authenticate(&Credentials::new("alice", "wrong-pass"), &PlainHasher)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::InvalidCredentials)));
    assert_eq!(err.status_code(), 403);

    let err = site
        .authenticate(&Credentials::new("nobody", "password1"), &PlainHasher)
        .await
        .unwrap_err();
    assert_eq!(err.to_body()["message"], "Wrong username or password.");
}

#[tokio::test]
async fn signup_validation_errors() {
    let site = Site::new(MemoryStore::new());
    let err = site
        .signup(&SignupDraft::new("no spaces", "123"), &PlainHasher)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 422);
    let body = err.to_body();
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn blocked_users_cannot_log_in() {
    let (site, claims) = site_with_users(&["admin", "bob"]).await;
    let admin = make_admin(&site, &claims[0]).await;

    let err = site.block_user(&claims[1], &admin.id).await.unwrap_err();
    assert_eq!(err.to_body()["message"], "Only Admin can do this operation");

    let blocked = site.block_user(&admin, &claims[1].id).await.unwrap();
    assert!(blocked.is_blocked);

    let err = site
        .authenticate(&Credentials::new("bob", "password1"), &PlainHasher)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.to_body()["message"], "Your account has been blocked or deleted.");

    assert!(site.claims_for(&claims[1].id).await.is_err());
}

#[tokio::test]
async fn question_lifecycle() {
    let (site, claims) = site_with_users(&["alice", "bob"]).await;
    let (alice, bob) = (&claims[0], &claims[1]);

    let q = site
        .create_question(alice, &draft("How do lifetimes work?", &["rust", "Lifetimes"]))
        .await
        .unwrap();
    assert_eq!(q.author, alice.id);

    let shown = site.show_question(&q.id).await.unwrap();
    assert_eq!(shown.views, 1);
    let shown = site.show_question(&q.id).await.unwrap();
    assert_eq!(shown.views, 2);

    let voted = site.vote(bob, &q.id, Vote::Up).await.unwrap();
    assert_eq!(voted.score, 1);
    let voted = site.vote(bob, &q.id, Vote::Up).await.unwrap();
    assert_eq!(voted.score, 1);
    let voted = site.vote(alice, &q.id, Vote::Down).await.unwrap();
    assert_eq!(voted.score, 0);

    let err = site.remove_question(bob, &q.id).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    site.remove_question(alice, &q.id).await.unwrap();
    let err = site.show_question(&q.id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_body()["message"], "Question not found.");
}

#[tokio::test]
async fn invalid_question_is_rejected() {
    let (site, claims) = site_with_users(&["alice"]).await;
    let err = site
        .create_question(&claims[0], &QuestionDraft::default())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 422);
    assert_eq!(err.to_body()["errors"][0]["param"], "title");
}

#[tokio::test]
async fn blocked_questions_leave_the_listing() {
    let (site, claims) = site_with_users(&["admin", "alice"]).await;
    let admin = make_admin(&site, &claims[0]).await;

    let keep = site.create_question(&claims[1], &draft("keep me", &["a"])).await.unwrap();
    let hide = site.create_question(&claims[1], &draft("hide me", &["a"])).await.unwrap();

    let err = site.block_question(&claims[1], &hide.id).await.unwrap_err();
    assert_eq!(err.status_code(), 403);
    site.block_question(&admin, &hide.id).await.unwrap();

    let page = site.list_questions(&ListParams::new()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].id, keep.id);
}

#[tokio::test]
async fn tags_are_counted_and_listed() {
    let (site, claims) = site_with_users(&["alice"]).await;
    let alice = &claims[0];

    site.create_question(alice, &draft("one", &["rust", "async"])).await.unwrap();
    site.create_question(alice, &draft("two", &["rust"])).await.unwrap();
    let three = site.create_question(alice, &draft("three", &["rust", "tokio"])).await.unwrap();

    let popular = site.popular_tags().await.unwrap();
    assert_eq!(popular[0].name.as_str(), "rust");
    assert_eq!(popular[0].count, 3);

    let tagged = site.list_by_tags("rust,tokio", &ListParams::new()).await.unwrap();
    assert_eq!(tagged.total, 1);

    let found = site.search_tags("TOK", &ListParams::new()).await.unwrap();
    assert_eq!(found.total, 1);
    assert_eq!(found.data[0].name.as_str(), "tokio");

    site.remove_question(alice, &three.id).await.unwrap();
    let tags = site.list_tags(&ListParams::new()).await.unwrap();
    let rust = tags.data.iter().find(|t| t.name.as_str() == "rust").unwrap();
    assert_eq!(rust.count, 2);
}

#[tokio::test]
async fn unusable_tag_lists_match_nothing() {
    let (site, claims) = site_with_users(&["alice", "admin"]).await;
    let admin = make_admin(&site, &claims[1]).await;
    site.create_question(&claims[0], &draft("about rust", &["rust"])).await.unwrap();
    let go = site.create_question(&claims[0], &draft("about go", &["go"])).await.unwrap();
    site.block_question(&admin, &go.id).await.unwrap();

    for tags in ["two words", ",", "", " , ", "rust,two words"] {
        let page = site
            .list_by_tags(tags, &ListParams::new().page("3"))
            .await
            .unwrap();
        assert_eq!(page.total, 0, "tags {:?}", tags);
        assert_eq!(page.count, 0, "tags {:?}", tags);
        assert_eq!(page.pages, 0, "tags {:?}", tags);
        assert_eq!(page.page, 3, "tags {:?}", tags);
    }

    let page = site.list_by_tags("RUST", &ListParams::new()).await.unwrap();
    assert_eq!(page.total, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_views_and_votes_are_all_kept() {
    let names: Vec<String> = (0..8).map(|n| format!("voter{}", n)).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let (site, claims) = site_with_users(&names).await;
    let site = std::sync::Arc::new(site);
    let q = site.create_question(&claims[0], &draft("popular", &["rust"])).await.unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    for voter in claims.clone() {
        let (site, id) = (site.clone(), q.id.clone());
        tasks.spawn(async move {
            site.show_question(&id).await.unwrap();
            site.vote(&voter, &id, Vote::Up).await.unwrap();
        });
    }
    while let Some(done) = tasks.join_next().await {
        done.unwrap();
    }

    let page = site.list_questions(&ListParams::new()).await.unwrap();
    assert_eq!(page.data[0].views, 8);
    assert_eq!(page.data[0].score, 8);
}

#[tokio::test]
async fn follow_edges_are_unique_per_pair() {
    let (site, claims) = site_with_users(&["alice", "bob"]).await;
    let (alice, bob) = (&claims[0], &claims[1]);
    let draft = FollowDraft::new(bob.id.as_str());

    site.toggle_follow(alice, &draft).await.unwrap();
    assert_eq!(site.store().len(overflow_core::Collection::Follows).await, 1);
    assert!(site.is_following(alice, bob.id.as_str()).await.unwrap().is_follow);

    site.toggle_follow(alice, &draft).await.unwrap();
    assert_eq!(site.store().len(overflow_core::Collection::Follows).await, 0);
}

#[tokio::test]
async fn per_author_listing_and_unknown_author() {
    let (site, claims) = site_with_users(&["alice", "bob"]).await;
    site.create_question(&claims[0], &draft("by alice", &["a"])).await.unwrap();
    site.create_question(&claims[1], &draft("by bob", &["a"])).await.unwrap();

    let page = site.list_questions_by_user("alice", &ListParams::new()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "by alice");

    let page = site
        .list_questions_by_user("ghost", &ListParams::new().page("2"))
        .await
        .unwrap();
    assert_eq!(page.total, 0);
    assert_eq!(page.count, 0);
    assert_eq!(page.pages, 0);
    assert_eq!(page.page, 2);
}

#[tokio::test]
async fn blog_edit_is_owner_only() {
    let (site, claims) = site_with_users(&["alice", "bob"]).await;
    let blog = site
        .create_blog(
            &claims[0],
            &BlogDraft {
                title: Some("First post".to_string()),
                text: Some("hello there, world".to_string()),
            },
        )
        .await
        .unwrap();

    let edit = BlogDraft {
        title: Some("Edited".to_string()),
        text: Some("an edited body text".to_string()),
    };
    let err = site.edit_blog(&claims[1], &blog.id, &edit).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    let edited = site.edit_blog(&claims[0], &blog.id, &edit).await.unwrap();
    assert_eq!(edited.title, "Edited");

    let shown = site.show_blog(&blog.id).await.unwrap();
    assert_eq!(shown.views, 1);

    let listed = site.list_blogs_by_user("alice", &ListParams::new()).await.unwrap();
    assert_eq!(listed.total, 1);
    let listed = site.list_blogs(&ListParams::new().key("EDITED")).await.unwrap();
    assert_eq!(listed.total, 1);

    site.remove_blog(&claims[0], &blog.id).await.unwrap();
    assert_eq!(site.list_blogs(&ListParams::new()).await.unwrap().total, 0);
}

#[tokio::test]
async fn follow_toggle() {
    let (site, claims) = site_with_users(&["alice", "bob", "carol"]).await;
    let alice = &claims[0];

    let state = site
        .toggle_follow(alice, &FollowDraft::new(claims[1].id.as_str()))
        .await
        .unwrap();
    assert!(state.is_follow);
    assert_eq!(state.msg.as_deref(), Some("Successfully Follow"));

    site.toggle_follow(alice, &FollowDraft::new(claims[2].id.as_str()))
        .await
        .unwrap();

    let following = site.list_following("alice").await.unwrap();
    let mut names: Vec<_> = following.iter().map(|p| p.username.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["bob", "carol"]);

    let state = site.is_following(alice, claims[1].id.as_str()).await.unwrap();
    assert!(state.is_follow);
    assert!(state.msg.is_none());

    let state = site
        .toggle_follow(alice, &FollowDraft::new(claims[1].id.as_str()))
        .await
        .unwrap();
    assert!(!state.is_follow);
    assert_eq!(state.msg.as_deref(), Some("Successfully Unfollow"));
    assert!(!site.is_following(alice, claims[1].id.as_str()).await.unwrap().is_follow);

    let err = site
        .toggle_follow(alice, &FollowDraft::new(RecordId::generate().as_str()))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = site.toggle_follow(alice, &FollowDraft::default()).await.unwrap_err();
    assert_eq!(err.status_code(), 422);

    assert!(site.list_following("ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn users_list_search_and_edit() {
    let (site, claims) = site_with_users(&["alice", "alfred", "bob"]).await;

    let all = site.list_users(&ListParams::new()).await.unwrap();
    assert_eq!(all.total, 3);

    let found = site.search_users("AL", &ListParams::new()).await.unwrap();
    assert_eq!(found.total, 2);

    let edited = site
        .edit_user(
            &claims[2],
            &ProfileEdit {
                display_name: Some("Bobby".to_string()),
                profile: Some("Rustacean".to_string()),
                exp: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.display_name, "Bobby");

    let fetched = site.find_user("bob").await.unwrap();
    assert_eq!(fetched.profile.as_deref(), Some("Rustacean"));

    let err = site.find_user("nobody").await.unwrap_err();
    assert_eq!(err.to_body()["message"], "User not found.");
}
