use super::*;
use serde_json::json;

#[test]
fn untitled_items_are_dropped() {
    assert!(WorkItem::normalize(&json!({}), "dev-1").is_none());
    assert!(WorkItem::normalize(&json!({ "title": "" }), "dev-1").is_none());
    assert!(WorkItem::normalize(&json!({ "title": 42 }), "dev-1").is_none());
}

#[test]
fn missing_id_falls_back_to_the_generated_one() {
    let item = WorkItem::normalize(&json!({ "title": "Thing" }), "music-3").unwrap();
    assert_eq!(item.id, "music-3");

    let item = WorkItem::normalize(&json!({ "title": "Thing", "id": "abc" }), "music-3").unwrap();
    assert_eq!(item.id, "abc");
}

#[test]
fn tags_accept_array_or_comma_string() {
    let from_array =
        WorkItem::normalize(&json!({ "title": "t", "tags": ["Rust", " wasm ", "", 7] }), "x")
            .unwrap();
    assert_eq!(from_array.tags, vec!["Rust", "wasm"]);

    let from_string =
        WorkItem::normalize(&json!({ "title": "t", "tags": "Rust, wasm ,," }), "x").unwrap();
    assert_eq!(from_string.tags, vec!["Rust", "wasm"]);

    let absent = WorkItem::normalize(&json!({ "title": "t", "tags": 3 }), "x").unwrap();
    assert!(absent.tags.is_empty());
}

#[test]
fn image_lists_merge_and_the_primary_leads() {
    let item = WorkItem::normalize(
        &json!({
            "title": "t",
            "image": "cover.png",
            "images": ["a.png", ""],
            "relatedImages": ["b.png"],
            "gallery": [" c.png "],
        }),
        "x",
    )
    .unwrap();
    assert_eq!(item.image.as_deref(), Some("cover.png"));
    assert_eq!(item.images, vec!["cover.png", "a.png", "b.png", "c.png"]);
}

#[test]
fn primary_image_is_not_duplicated_in_the_list() {
    let item = WorkItem::normalize(
        &json!({ "title": "t", "image": "a.png", "images": ["a.png", "b.png"] }),
        "x",
    )
    .unwrap();
    assert_eq!(item.images, vec!["a.png", "b.png"]);
}

#[test]
fn first_list_image_becomes_primary_when_none_is_declared() {
    let item =
        WorkItem::normalize(&json!({ "title": "t", "images": ["a.png", "b.png"] }), "x").unwrap();
    assert_eq!(item.image.as_deref(), Some("a.png"));

    let imageless = WorkItem::normalize(&json!({ "title": "t" }), "x").unwrap();
    assert_eq!(imageless.image, None);
}

#[test]
fn bare_string_links_use_the_host_as_label() {
    let item = WorkItem::normalize(
        &json!({ "title": "t", "links": ["https://example.com/repo"] }),
        "x",
    )
    .unwrap();
    assert_eq!(
        item.links,
        vec![WorkLink {
            label: "example.com/repo".to_owned(),
            url: "https://example.com/repo".to_owned(),
        }]
    );
}

#[test]
fn object_links_accept_href_and_title_aliases() {
    let item = WorkItem::normalize(
        &json!({
            "title": "t",
            "relatedLinks": [
                { "href": "https://a.dev", "title": "A" },
                { "url": "https://b.dev" },
                { "label": "no url here" },
                17,
            ],
        }),
        "x",
    )
    .unwrap();
    assert_eq!(
        item.links,
        vec![
            WorkLink {
                label: "A".to_owned(),
                url: "https://a.dev".to_owned(),
            },
            WorkLink {
                label: "https://b.dev".to_owned(),
                url: "https://b.dev".to_owned(),
            },
        ]
    );
}

#[test]
fn links_field_takes_precedence_over_related_links() {
    let item = WorkItem::normalize(
        &json!({
            "title": "t",
            "links": ["https://primary.dev"],
            "relatedLinks": ["https://ignored.dev"],
        }),
        "x",
    )
    .unwrap();
    assert_eq!(item.links.len(), 1);
    assert_eq!(item.links[0].url, "https://primary.dev");
}
