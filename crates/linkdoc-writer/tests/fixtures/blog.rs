//! Blog entities and resources
//!
//! Posts have an optional author (to-one) and a list of comments (to-many).

use linkdoc_resource::{
	Attributes, Entity, Identifier, Related, Relation, Resource, ResourceBuilder, ResourceMeta,
	to_attributes,
};
use rstest::fixture;
use serde::Serialize;
use serde_json::json;

pub const POST_CONTENT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
pub const AUTHOR_NAME: &str = "Król Julian";
pub const COMMENT_CONTENT: &str = "Proin ullamcorper magna est, at adipiscing tortor auctor sed.";

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
	pub id: i64,
	pub name: String,
}

impl Entity for Author {
	fn id(&self) -> Option<Identifier> {
		Some(self.id.into())
	}

	fn attributes(&self) -> Attributes {
		let mut attributes = Attributes::new();
		attributes.insert("name".to_string(), json!(self.name));
		attributes
	}
}

/// Serialized through serde, `id` included, the way a model's `to_dict` would.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
	pub id: i64,
	pub content: String,
	#[serde(skip)]
	pub post_id: Option<i64>,
}

impl Entity for Comment {
	fn id(&self) -> Option<Identifier> {
		Some(self.id.into())
	}

	fn attributes(&self) -> Attributes {
		to_attributes(self).unwrap()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
	pub id: i64,
	pub content: String,
	pub author: Option<Author>,
	pub comments: Vec<Comment>,
}

impl Post {
	pub fn with_author(mut self, author: Author) -> Self {
		self.author = Some(author);
		self
	}

	pub fn with_comments(mut self, comments: impl IntoIterator<Item = Comment>) -> Self {
		self.comments = comments.into_iter().collect();
		self
	}
}

impl Entity for Post {
	fn id(&self) -> Option<Identifier> {
		Some(self.id.into())
	}

	fn attributes(&self) -> Attributes {
		let mut attributes = Attributes::new();
		attributes.insert("content".to_string(), json!(self.content));
		attributes
	}
}

pub fn post(id: i64) -> Post {
	Post {
		id,
		content: POST_CONTENT.to_string(),
		author: None,
		comments: Vec::new(),
	}
}

pub fn author(id: i64) -> Author {
	Author {
		id,
		name: AUTHOR_NAME.to_string(),
	}
}

pub fn comment(id: i64) -> Comment {
	Comment {
		id,
		content: COMMENT_CONTENT.to_string(),
		post_id: None,
	}
}

/// Posts resource builder: name "post", href `/posts/{posts.id}`
pub fn posts() -> ResourceBuilder<Post> {
	Resource::builder("posts").name("post").href("/posts/{posts.id}")
}

/// Posts resource holding `entities`, without relations or templates
pub fn posts_of(entities: impl IntoIterator<Item = Post>) -> Resource<Post> {
	posts().entities(entities).build().unwrap()
}

#[fixture]
pub fn authors_meta() -> ResourceMeta {
	ResourceMeta::new("authors")
		.unwrap()
		.with_name("author")
		.with_href("/authors/{authors.id}")
		.unwrap()
}

#[fixture]
pub fn comments_meta() -> ResourceMeta {
	ResourceMeta::new("comments")
		.unwrap()
		.with_name("comment")
		.with_href("/comments/{comments.id}")
		.unwrap()
}

pub fn author_relation(authors: &ResourceMeta) -> Relation<Post> {
	Relation::to_one(authors, |post: &Post| Related::optional(post.author.as_ref()))
}

pub fn comments_relation(comments: &ResourceMeta) -> Relation<Post> {
	Relation::to_many(comments, |post: &Post| Related::many(post.comments.iter()))
}
