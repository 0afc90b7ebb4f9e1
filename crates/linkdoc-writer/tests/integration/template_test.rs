//! Integration tests for top-level link templates

use assert_json_diff::assert_json_eq;
use linkdoc_resource::LinkTemplate;
use linkdoc_writer::{Writer, WriterConfig};
use rstest::rstest;
use serde_json::json;

use crate::fixtures::*;

/// Test that templates are rendered verbatim, without entity binding
#[rstest]
fn test_template_rendered_as_href() {
	// Arrange
	let resource = posts()
		.entities([post(1), post(2)])
		.template(LinkTemplate::new("posts.comments", "/posts/{posts.id}/comments").unwrap())
		.build()
		.unwrap();

	// Act
	let value = Writer::default().write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(
		value["links"],
		json!({"posts.comments": "/posts/{posts.id}/comments"})
	);
}

#[rstest]
fn test_template_rendered_as_object() {
	// Arrange
	let resource = posts()
		.entity(post(1))
		.template(
			LinkTemplate::typed(
				"posts.comments",
				"/posts/1/comments/{posts.comments}",
				"comments",
			)
			.unwrap(),
		)
		.build()
		.unwrap();
	let writer = Writer::new(WriterConfig::default().with_template_links_as_object(true));

	// Act
	let value = writer.write(&resource).unwrap().to_value().unwrap();

	// Assert
	assert_json_eq!(
		value,
		json!({
			"links": {
				"posts.comments": {
					"href": "/posts/1/comments/{posts.comments}",
					"type": "comments"
				}
			},
			"posts": [{"id": "1", "content": POST_CONTENT, "href": "/posts/1"}]
		})
	);
}

#[rstest]
fn test_templates_not_attached_when_disabled() {
	// Arrange
	let resource = posts()
		.entity(post(1))
		.template(LinkTemplate::new("posts.comments", "/posts/{posts.id}/comments").unwrap())
		.build()
		.unwrap();
	let writer = Writer::new(WriterConfig::default().with_attach_templates(false));

	// Act
	let document = writer.write(&resource).unwrap();

	// Assert
	assert!(document.links().is_empty());
	assert!(document.to_value().unwrap().get("links").is_none());
}

/// Test that templates alone do not make a document non-empty
#[rstest]
fn test_templates_without_entities_write_nothing() {
	// Arrange
	let resource = posts()
		.template(LinkTemplate::new("posts.comments", "/posts/{posts.id}/comments").unwrap())
		.build()
		.unwrap();

	// Act
	let document = Writer::default().write(&resource).unwrap();

	// Assert
	assert_eq!(document.to_value().unwrap(), json!({}));
}
