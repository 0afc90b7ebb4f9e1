//! Integration tests for relationship links
//!
//! Tests every link form against to-one (author) and to-many (comments) relations.

use assert_json_diff::assert_json_eq;
use linkdoc_resource::ResourceMeta;
use linkdoc_writer::{LinkForm, Writer, WriterConfig};
use rstest::rstest;
use serde_json::{Value, json};

use crate::fixtures::*;

fn writer(link_form: LinkForm) -> Writer {
	Writer::new(WriterConfig::default().with_link_form(link_form))
}

fn post_links(value: &Value) -> &Value {
	&value["posts"][0]["links"]
}

#[rstest]
#[case(LinkForm::Id, json!("100"))]
#[case(
	LinkForm::Object,
	json!({"id": "100", "href": "/authors/100", "type": "authors"})
)]
#[case(
	LinkForm::ObjectsArray,
	json!({"id": "100", "href": "/authors/100", "type": "authors"})
)]
fn test_author_link(
	authors_meta: ResourceMeta,
	#[case] link_form: LinkForm,
	#[case] expected: Value,
) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_author(author(100)))
		.relation(author_relation(&authors_meta))
		.build()
		.unwrap();

	// Act
	let value = writer(link_form).write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(post_links(&value), json!({"author": expected}));
	assert_eq!(value["posts"][0]["content"], json!(POST_CONTENT));
	assert_eq!(value["posts"][0]["href"], json!("/posts/1"));
}

#[rstest]
fn test_comments_link_as_ids(comments_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_comments([comment(11), comment(12)]))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();

	// Act
	let value = writer(LinkForm::Id).write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(post_links(&value), json!({"comments": ["11", "12"]}));
}

#[rstest]
fn test_comments_link_as_object(comments_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_comments([comment(11), comment(12)]))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();

	// Act
	let value = writer(LinkForm::Object).write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(
		post_links(&value),
		json!({
			"comments": {"ids": ["11", "12"], "href": "/comments/11,12", "type": "comments"}
		})
	);
}

/// Test that objects_array renders one link object per comment
#[rstest]
fn test_comments_link_as_objects_array(comments_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_comments([comment(11), comment(12), comment(13)]))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();

	// Act
	let value = writer(LinkForm::ObjectsArray)
		.write(&resource)
		.unwrap()
		.to_value()
		.unwrap();

	// Assert
	assert_json_eq!(
		post_links(&value),
		json!({
			"comments": [
				{"id": "11", "href": "/comments/11", "type": "comments"},
				{"id": "12", "href": "/comments/12", "type": "comments"},
				{"id": "13", "href": "/comments/13", "type": "comments"}
			]
		})
	);
}

#[rstest]
fn test_objects_array_without_comments_is_empty(comments_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();

	// Act
	let value = writer(LinkForm::ObjectsArray)
		.write(&resource)
		.unwrap()
		.to_value()
		.unwrap();

	// Assert
	assert_json_eq!(post_links(&value), json!({"comments": []}));
}

#[rstest]
fn test_author_and_comments(authors_meta: ResourceMeta, comments_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(
			post(1)
				.with_author(author(100))
				.with_comments([comment(11), comment(12)]),
		)
		.relation(author_relation(&authors_meta))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();

	// Act
	let value = writer(LinkForm::Object).write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(
		post_links(&value),
		json!({
			"author": {"id": "100", "href": "/authors/100", "type": "authors"},
			"comments": {"ids": ["11", "12"], "href": "/comments/11,12", "type": "comments"}
		})
	);
}

/// Test that several comment ids are joined with commas inside a nested href
#[rstest]
fn test_multiple_ids_joined_in_href() {
	// Arrange
	let nested_comments = ResourceMeta::new("comments")
		.unwrap()
		.with_name("comment")
		.with_href("/posts/{posts.id}/comments/{comments.id}")
		.unwrap();
	let resource = posts()
		.entity(post(1).with_comments([comment(11), comment(12), comment(13)]))
		.entity(post(2).with_comments([comment(14)]))
		.relation(comments_relation(&nested_comments))
		.build()
		.unwrap();

	// Act
	let value = Writer::default().write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_eq!(
		value["posts"][0]["links"]["comments"]["href"],
		json!("/posts/1/comments/11,12,13")
	);
	assert_eq!(
		value["posts"][1]["links"]["comments"]["href"],
		json!("/posts/2/comments/14")
	);
	assert_eq!(
		value["linked"]["comments"][0]["href"],
		json!("/posts/1/comments/11")
	);
}

#[rstest]
fn test_post_without_author_links_null(authors_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1))
		.relation(author_relation(&authors_meta))
		.build()
		.unwrap();

	// Act
	let value = Writer::default().write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(post_links(&value), json!({"author": null}));
	assert!(value.get("linked").is_none());
}

#[rstest]
fn test_links_not_attached_when_disabled(authors_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_author(author(100)))
		.relation(author_relation(&authors_meta))
		.build()
		.unwrap();
	let writer = Writer::new(WriterConfig::default().with_attach_document_links(false));

	// Act
	let value = writer.write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert!(value["posts"][0].get("links").is_none());
	assert_eq!(value["linked"]["authors"][0]["id"], json!("100"));
}
