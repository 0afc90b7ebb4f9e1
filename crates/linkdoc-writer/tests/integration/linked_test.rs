//! Integration tests for the linked side-table
//!
//! Tests that related entities are rendered once per collection, in first-reference order.

use assert_json_diff::assert_json_eq;
use linkdoc_resource::ResourceMeta;
use linkdoc_writer::{Writer, WriterConfig};
use rstest::rstest;
use serde_json::json;

use crate::fixtures::*;

#[rstest]
fn test_author_linked(authors_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_author(author(100)))
		.relation(author_relation(&authors_meta))
		.build()
		.unwrap();

	// Act
	let value = Writer::default().write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(
		value["linked"],
		json!({
			"authors": [{"id": "100", "name": AUTHOR_NAME, "href": "/authors/100"}]
		})
	);
}

/// Test that serde-derived attributes never shadow the rendered id
#[rstest]
fn test_comments_linked(comments_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_comments([comment(11), comment(12), comment(13)]))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();

	// Act
	let value = Writer::default().write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(
		value["linked"],
		json!({
			"comments": [
				{"id": "11", "content": COMMENT_CONTENT, "href": "/comments/11"},
				{"id": "12", "content": COMMENT_CONTENT, "href": "/comments/12"},
				{"id": "13", "content": COMMENT_CONTENT, "href": "/comments/13"}
			]
		})
	);
}

/// Test that an author shared by several posts is linked once
#[rstest]
fn test_shared_author_linked_once(authors_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_author(author(100)))
		.entity(post(2).with_author(author(101)))
		.entity(post(3).with_author(author(101)))
		.relation(author_relation(&authors_meta))
		.build()
		.unwrap();

	// Act
	let document = Writer::default().write(&resource).unwrap();

	// Assert
	let authors = document.linked_collection("authors").unwrap();
	let ids: Vec<&str> = authors.iter().map(|doc| doc.id.as_str()).collect();
	assert_eq!(ids, vec!["100", "101"]);
	assert_eq!(document.primary().len(), 3);
}

/// Test that the first rendering of a linked entity is kept
#[rstest]
fn test_first_linked_document_wins(authors_meta: ResourceMeta) {
	// Arrange
	let renamed = Author {
		id: 100,
		name: "Mort".to_string(),
	};
	let resource = posts()
		.entity(post(1).with_author(author(100)))
		.entity(post(2).with_author(renamed))
		.relation(author_relation(&authors_meta))
		.build()
		.unwrap();

	// Act
	let document = Writer::default().write(&resource).unwrap();

	// Assert
	let authors = document.linked_collection("authors").unwrap();
	assert_eq!(authors.len(), 1);
	assert_eq!(authors[0].attributes["name"], json!(AUTHOR_NAME));
}

#[rstest]
fn test_linked_without_href(comments_meta: ResourceMeta) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_comments([comment(11)]))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();
	let writer = Writer::new(WriterConfig::default().with_attach_document_href(false));

	// Act
	let value = writer.write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(
		value["linked"],
		json!({"comments": [{"id": "11", "content": COMMENT_CONTENT}]})
	);
	assert_eq!(
		value["posts"][0]["links"]["comments"]["href"],
		json!("/comments/11")
	);
}

#[rstest]
fn test_linked_not_attached_when_disabled(
	authors_meta: ResourceMeta,
	comments_meta: ResourceMeta,
) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_author(author(100)).with_comments([comment(11)]))
		.relation(author_relation(&authors_meta))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();
	let writer = Writer::new(WriterConfig::default().with_attach_linked(false));

	// Act
	let document = writer.write(&resource).unwrap();

	// Assert
	assert!(document.linked().is_empty());
	assert!(document.to_value().unwrap().get("linked").is_none());
	assert_eq!(document.primary()[0].links.as_ref().unwrap().len(), 2);
}

/// Test that only collections that received documents appear in `linked`
#[rstest]
fn test_linked_skips_empty_collections(
	authors_meta: ResourceMeta,
	comments_meta: ResourceMeta,
) {
	// Arrange
	let resource = posts()
		.entity(post(1).with_comments([comment(11)]))
		.relation(author_relation(&authors_meta))
		.relation(comments_relation(&comments_meta))
		.build()
		.unwrap();

	// Act
	let document = Writer::default().write(&resource).unwrap();

	// Assert
	let collections: Vec<&String> = document.linked().keys().collect();
	assert_eq!(collections, vec!["comments"]);
}
