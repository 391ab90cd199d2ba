//! End-to-end tests compiling whole schemas into collection schemas

use gqlmongo::{compile_json_ast, compile_sdl, Config, Error, FieldDescriptor, StorageType};

const USER_SCHEMA: &str = r#"
scalar Time

interface Node {
    id: ID!
}

type User implements Node {
    id: ID!
    name: String!
    bestFriend: User
    friends: [User!]
}
"#;

const BLOG_SCHEMA: &str = r#"
scalar Time

interface Node {
    id: ID!
}

interface Actor {
    id: ID!
}

type Post implements Node {
    id: ID!
    author: Actor!
    tags: [String]!
    publishedAt: Time
    comments: CommentConnection
}

type Comment implements Node {
    id: ID!
    body: String!
}

type CommentConnection {
    edges: [CommentEdge]
    pageInfo: PageInfo!
}

type CommentEdge {
    cursor: String!
    node: Comment
}

type PageInfo {
    hasNextPage: Boolean!
}
"#;

#[test]
fn test_compile_user_schema() {
    let collections = compile_sdl(USER_SCHEMA, &Config::default()).unwrap();
    assert_eq!(collections.len(), 1);

    let user = &collections[0];
    assert_eq!(user.name, "User");
    assert_eq!(
        user.field("id"),
        Some(&FieldDescriptor::primitive(StorageType::ObjectId).required())
    );
    assert_eq!(
        user.field("name"),
        Some(&FieldDescriptor::primitive(StorageType::String).required())
    );
    assert_eq!(user.field("bestFriend"), Some(&FieldDescriptor::reference("User")));
    assert_eq!(
        user.field("friends"),
        Some(&FieldDescriptor::reference("User").list().required())
    );
}

#[test]
fn test_user_schema_json() {
    let collections = compile_sdl(USER_SCHEMA, &Config::default()).unwrap();
    let json = serde_json::to_string(&collections).unwrap();

    insta::assert_snapshot!(json, @r#"[["User",{"id":{"baseType":"ObjectId","required":true},"name":{"baseType":"String","required":true},"bestFriend":{"baseType":"Reference","ref":"User"},"friends":{"baseType":"Reference","ref":"User","isList":true,"required":true}}]]"#);
}

#[test]
fn test_blog_schema_json() {
    let collections = compile_sdl(BLOG_SCHEMA, &Config::default()).unwrap();
    let json = serde_json::to_value(&collections).unwrap();

    let expected = serde_json::json!([
        [
            "Post",
            {
                "id": { "baseType": "ObjectId", "required": true },
                "author": { "baseType": "Reference", "required": true },
                "tags": { "baseType": "String", "isList": true, "listRequired": true },
                "publishedAt": { "baseType": "Date" },
                "comments": { "baseType": "Reference", "ref": "Comment" }
            }
        ],
        [
            "Comment",
            {
                "id": { "baseType": "ObjectId", "required": true },
                "body": { "baseType": "String", "required": true }
            }
        ]
    ]);
    assert_eq!(json, expected);
}

#[test]
fn test_undeclared_connection_substitutes() {
    // FooConnection is never declared but still collapses onto Foo
    let sdl = r#"
    interface Node { id: ID! }
    type Foo implements Node { id: ID! }
    type Bar implements Node { foos: FooConnection! }
    "#;
    let collections = compile_sdl(sdl, &Config::default()).unwrap();
    assert_eq!(
        collections[1].field("foos"),
        Some(&FieldDescriptor::reference("Foo").required())
    );

    // Without Foo the substituted name is what fails
    let sdl = r#"
    interface Node { id: ID! }
    type Bar implements Node { foos: FooConnection }
    "#;
    match compile_sdl(sdl, &Config::default()) {
        Err(Error::UnknownType(name)) => assert_eq!(name, "Foo"),
        other => panic!("Expected UnknownType, got {:?}", other),
    }
}

#[test]
fn test_unknown_type_yields_no_output() {
    let sdl = r#"
    interface Node { id: ID! }
    type User implements Node { id: ID! name: String }
    type Post implements Node { id: ID! status: Status }
    enum Status { DRAFT PUBLISHED }
    "#;

    // Enums have no storage mapping
    match compile_sdl(sdl, &Config::default()) {
        Err(Error::UnknownType(name)) => assert_eq!(name, "Status"),
        other => panic!("Expected UnknownType, got {:?}", other),
    }
}

#[test]
fn test_schema_without_nodes() {
    let sdl = "type Query { hello: String }";
    assert!(compile_sdl(sdl, &Config::default()).unwrap().is_empty());
}

#[test]
fn test_unmapped_scalars() {
    let sdl = r#"
    scalar Email
    interface Node { id: ID! }
    type User implements Node { id: ID! }
    "#;

    // Declared but unused: only a warning by default
    assert_eq!(compile_sdl(sdl, &Config::default()).unwrap().len(), 1);

    let strict = Config {
        strict_scalars: true,
        ..Config::default()
    };
    match compile_sdl(sdl, &strict) {
        Err(Error::UnmappedScalar(name)) => assert_eq!(name, "Email"),
        other => panic!("Expected UnmappedScalar, got {:?}", other),
    }

    let mapped =
        Config::from_json(r#"{ "custom_scalars": { "Email": "String" }, "strict_scalars": true }"#)
            .unwrap();
    assert!(compile_sdl(sdl, &mapped).is_ok());
}

#[test]
fn test_custom_scalar_field() {
    let sdl = r#"
    scalar Email
    interface Node { id: ID! }
    type User implements Node { emails: [Email!]! }
    "#;

    assert!(matches!(
        compile_sdl(sdl, &Config::default()),
        Err(Error::UnknownType(_))
    ));

    let config = Config::from_json(r#"{ "custom_scalars": { "Email": "String" } }"#).unwrap();
    let collections = compile_sdl(sdl, &config).unwrap();
    assert_eq!(
        collections[0].field("emails"),
        Some(
            &FieldDescriptor::primitive(StorageType::String)
                .list()
                .required()
                .list_required()
        )
    );
}

#[test]
fn test_parse_errors_surface() {
    assert!(matches!(
        compile_sdl("type User implements Node {", &Config::default()),
        Err(Error::SchemaParse(_))
    ));
}

#[test]
fn test_compile_json_ast() {
    let json = r#"
    {
        "kind": "Document",
        "definitions": [
            { "kind": "InterfaceTypeDefinition", "name": { "value": "Node" }, "fields": [] },
            {
                "kind": "ObjectTypeDefinition",
                "name": { "value": "User" },
                "interfaces": [ { "kind": "NamedType", "name": { "value": "Node" } } ],
                "fields": [
                    {
                        "name": { "value": "id" },
                        "type": { "kind": "NonNullType", "type": { "kind": "NamedType", "name": { "value": "ID" } } }
                    }
                ]
            }
        ]
    }
    "#;

    let collections = compile_json_ast(json, &Config::default()).unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(
        collections[0].field("id"),
        Some(&FieldDescriptor::primitive(StorageType::ObjectId).required())
    );
}
