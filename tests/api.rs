use anyhow::Result;
use serde_json::json;
use trellor::{Action, Card, Client, List, Pos};
use wiremock::matchers::{
    body_string, body_string_contains, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url("the-key", "the-token", "b1", &server.uri())
}

fn list_json(id: &str, name: &str, pos: f64) -> serde_json::Value {
    json!({ "id": id, "name": name, "closed": false, "idBoard": "b1", "pos": pos })
}

fn card_json(id: &str, name: &str, list_id: &str, pos: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "desc": "",
        "closed": false,
        "idBoard": "b1",
        "idList": list_id,
        "pos": pos
    })
}

#[tokio::test]
async fn get_requests_carry_credentials_and_no_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/lists"))
        .and(query_param("key", "the-key"))
        .and(query_param("token", "the-token"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            list_json("l1", "To Do", 8192.0),
            list_json("l2", "Done", 16384.0),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let lists = List::all(&client_for(&server)).await?.expect("lists");
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[1].name(), "Done");
    Ok(())
}

#[tokio::test]
async fn find_returns_first_exact_match() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            list_json("l1", "Done!", 1.0),
            list_json("l2", "Done", 2.0),
            list_json("l3", "Done", 3.0),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let found = List::find(&client, "Done").await?.expect("match");
    assert_eq!(found.id(), "l2");

    assert!(List::find(&client, "done").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn create_list_returns_existing_without_posting() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/lists"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([list_json("l7", "Doing", 4.0)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/boards/b1/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json("l8", "Doing", 5.0)))
        .expect(0)
        .mount(&server)
        .await;

    let created = List::create(&client_for(&server), "Doing", "l1")
        .await?
        .expect("list");
    assert_eq!(created.id(), "l7");
    Ok(())
}

#[tokio::test]
async fn create_list_posts_next_to_anchor() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lists/l1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json("l1", "Todo", 8.0)))
        .mount(&server)
        .await;
    // credentials and parameters travel in the form body, not the URL
    Mock::given(method("POST"))
        .and(path("/boards/b1/lists"))
        .and(body_string_contains("name=Doing"))
        .and(body_string_contains("pos=9"))
        .and(body_string_contains("key=the-key"))
        .and(body_string_contains("token=the-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json("l9", "Doing", 9.0)))
        .expect(1)
        .mount(&server)
        .await;

    let created = List::create(&client_for(&server), "Doing", "l1")
        .await?
        .expect("list");
    assert_eq!(created.id(), "l9");
    Ok(())
}

#[tokio::test]
async fn create_card_posts_form_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cards/"))
        .and(body_string_contains("name=groceries"))
        .and(body_string_contains("idList=l1"))
        .and(body_string_contains("pos=top"))
        .and(body_string_contains("key=the-key"))
        .and(query_param_is_missing("key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(card_json("c1", "groceries", "l1", 1.0)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let card = Card::create(&client_for(&server), "l1", "groceries", Pos::Top)
        .await?
        .expect("card");
    assert_eq!(card.id(), "c1");
    assert_eq!(card.id_list(), "l1");
    Ok(())
}

#[tokio::test]
async fn move_all_preserves_positions_and_returns_originals() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/src/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            card_json("c1", "one", "src", 16.0),
            card_json("c2", "two", "src", 32.0),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/cards/c1"))
        .and(body_string_contains("idList=dst"))
        .and(body_string_contains("pos=16"))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_json("c1", "one", "dst", 16.0)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/cards/c2"))
        .and(body_string_contains("idList=dst"))
        .and(body_string_contains("pos=32"))
        .respond_with(ResponseTemplate::new(200).set_body_json(card_json("c2", "two", "dst", 32.0)))
        .expect(1)
        .mount(&server)
        .await;

    let moved = Card::move_all(&client_for(&server), "src", "dst")
        .await?
        .expect("cards");
    // originals come back untouched
    assert_eq!(moved.len(), 2);
    assert_eq!(moved[0].id_list(), "src");
    assert!((moved[1].pos() - 32.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn comments_filter_and_delete_one_call_each() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/l1/cards"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([card_json("c9", "task", "l1", 1.0)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cards/c9/actions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "a1",
                "type": "commentCard",
                "date": "2019-09-16T13:34:37.718Z",
                "data": { "text": "first", "card": { "id": "c9", "name": "task" } }
            },
            {
                "id": "a2",
                "type": "updateCard",
                "date": "2019-09-16T13:35:00.000Z",
                "data": { "card": { "id": "c9" } }
            },
            {
                "id": "a3",
                "type": "commentCard",
                "date": "2019-09-16T13:36:12.002Z",
                "data": { "text": "second", "card": { "id": "c9", "name": "task" } }
            },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/cards/c9/actions/a1/comments"))
        .and(body_string_contains("token=the-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_value": null })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/cards/c9/actions/a3/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_value": null })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cards = Card::in_list(&client, "l1").await?.expect("cards");
    let comments = cards[0].comments(&client).await?.expect("comments");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text(), Some("first"));
    assert!(comments.iter().all(Action::is_comment));

    Action::delete_comments(&client, &comments).await?;
    Ok(())
}

#[tokio::test]
async fn api_error_collapses_to_none() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/lists"))
        .respond_with(ResponseTemplate::new(404).set_body_string("board not found"))
        .mount(&server)
        .await;

    let lists = List::all(&client_for(&server)).await?;
    assert!(lists.is_none());

    // the absence signal flows through find as well
    assert!(List::find(&client_for(&server), "Done").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn api_error_on_write_collapses_to_none() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cards/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let card = Card::create(&client_for(&server), "l1", "groceries", Pos::Bottom).await?;
    assert!(card.is_none());
    Ok(())
}
